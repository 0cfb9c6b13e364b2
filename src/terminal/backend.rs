//! Crossterm-backed terminal.
//!
//! Frames are drawn on stderr so stdout stays free for the selection result,
//! which lets the picker sit in the middle of a shell pipeline.

use std::io::{self, Stderr, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{decode_key, Key, RestoreHandle, Terminal};

pub struct CrosstermTerminal {
    out: Stderr,
    vim_keys: bool,
}

impl CrosstermTerminal {
    pub fn new(vim_keys: bool) -> Self {
        Self {
            out: io::stderr(),
            vim_keys,
        }
    }
}

/// Leave the alternate screen and raw mode. Errors are ignored: this runs on
/// the way out, possibly from the signal thread, with nowhere to report them.
fn leave() {
    let mut out = io::stderr();
    let _ = crossterm::execute!(out, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

impl Terminal for CrosstermTerminal {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(self.out, EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    fn restore_handle(&self) -> RestoreHandle {
        RestoreHandle::new(leave)
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(match event::read()? {
            Event::Key(key) => decode_key(key, self.vim_keys),
            Event::Resize(_, _) => Key::Resize,
            _ => Key::Other,
        })
    }
}
