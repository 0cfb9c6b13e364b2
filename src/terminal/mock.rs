//! Scripted terminal for engine and renderer tests.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{Key, RestoreHandle, Terminal};

/// Records what was drawn and how often the terminal was restored.
pub struct MockTerminal {
    keys: VecDeque<Key>,
    cols: u16,
    rows: u16,
    screen: Vec<String>,
    row: usize,
    pub enters: usize,
    pub frames: usize,
    writes: usize,
    restores: Arc<AtomicUsize>,
    on_write: Option<(usize, Box<dyn FnMut()>)>,
}

impl MockTerminal {
    pub fn new(cols: u16, rows: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            cols,
            rows,
            screen: vec![String::new(); rows as usize],
            row: 0,
            enters: 0,
            frames: 0,
            writes: 0,
            restores: Arc::new(AtomicUsize::new(0)),
            on_write: None,
        }
    }

    /// Run `hook` when the `nth` write (1-based) happens.
    pub fn on_write(mut self, nth: usize, hook: impl FnMut() + 'static) -> Self {
        self.on_write = Some((nth, Box::new(hook)));
        self
    }

    pub fn restore_count(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }

    /// Last drawn frame, trailing blank rows removed.
    pub fn screen(&self) -> Vec<String> {
        let mut lines = self.screen.clone();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn screen_text(&self) -> String {
        self.screen().join("\n")
    }
}

impl Terminal for MockTerminal {
    fn enter(&mut self) -> io::Result<()> {
        self.enters += 1;
        Ok(())
    }

    fn restore_handle(&self) -> RestoreHandle {
        let counter = self.restores.clone();
        RestoreHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.frames += 1;
        self.screen.iter_mut().for_each(String::clear);
        self.row = 0;
        Ok(())
    }

    fn move_to(&mut self, row: u16, _col: u16) -> io::Result<()> {
        self.row = row as usize;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes += 1;
        if let Some((nth, hook)) = self.on_write.as_mut() {
            if *nth == self.writes {
                hook();
            }
        }
        if let Some(line) = self.screen.get_mut(self.row) {
            line.push_str(text);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}
