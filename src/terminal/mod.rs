//! Terminal I/O collaborator.
//!
//! The engine only talks to the terminal through [`Terminal`]. The real
//! implementation is [`CrosstermTerminal`]; tests use a scripted mock.

mod backend;
mod key;
#[cfg(test)]
pub(crate) mod mock;

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use backend::CrosstermTerminal;
pub use key::{decode_key, Action, Direction, Jump, Key};

/// Primitive terminal operations used by the engine and renderers.
pub trait Terminal {
    /// Enter the alternate screen and raw input mode.
    fn enter(&mut self) -> io::Result<()>;

    /// A fresh handle that puts the terminal back into normal mode, taken
    /// once per run. Safe to call from another thread and more than once.
    fn restore_handle(&self) -> RestoreHandle;

    /// Current size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn clear(&mut self) -> io::Result<()>;

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Block until the next input event.
    fn read_key(&mut self) -> io::Result<Key>;
}

struct RestoreInner {
    done: AtomicBool,
    action: Box<dyn Fn() + Send + Sync>,
}

/// Idempotent terminal restore routine.
///
/// Clones share one flag, so the action runs at most once no matter how many
/// paths (drop guard, signal handler, Ctrl-C key) reach it.
#[derive(Clone)]
pub struct RestoreHandle {
    inner: Arc<RestoreInner>,
}

impl RestoreHandle {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(RestoreInner {
                done: AtomicBool::new(false),
                action: Box::new(action),
            }),
        }
    }

    /// Run the restore action unless it already ran. Returns true if it ran now.
    pub fn restore(&self) -> bool {
        if self.inner.done.swap(true, Ordering::SeqCst) {
            return false;
        }
        (self.inner.action)();
        true
    }

    pub fn is_restored(&self) -> bool {
        self.inner.done.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for RestoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestoreHandle")
            .field("restored", &self.is_restored())
            .finish()
    }
}
