//! Process-wide interrupt slot.
//!
//! At most one picker session owns the terminal at a time. While it runs, its
//! [`RestoreHandle`] sits in a global slot so the signal handler (which runs
//! on its own thread) can put the terminal back before the process exits.
//! The handler covers SIGINT, SIGTERM and SIGHUP.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use crate::error::{PickerError, PickerResult};
use crate::terminal::RestoreHandle;

/// Exit status used after an interrupt or termination signal (128 + SIGINT).
pub const INTERRUPT_EXIT_CODE: i32 = 130;

static SLOT: Mutex<Option<RestoreHandle>> = Mutex::new(None);
static SIGNAL_HANDLER: OnceLock<()> = OnceLock::new();

fn slot() -> MutexGuard<'static, Option<RestoreHandle>> {
    // A panic while holding the lock leaves a valid Option behind.
    SLOT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Claim the slot for one session.
///
/// Fails with [`PickerError::SessionActive`] while another session holds it.
pub fn install(handle: RestoreHandle) -> PickerResult<()> {
    register_signal_handler();

    let mut slot = slot();
    if slot.is_some() {
        return Err(PickerError::SessionActive);
    }
    *slot = Some(handle);
    debug!("interrupt cleanup installed");
    Ok(())
}

/// Release the slot. Calling it with nothing installed is a no-op.
pub fn uninstall() {
    if slot().take().is_some() {
        debug!("interrupt cleanup removed");
    }
}

pub fn is_installed() -> bool {
    slot().is_some()
}

/// Run the installed cleanup without exiting. Returns true if the terminal
/// was restored by this call.
pub fn run_installed_cleanup() -> bool {
    // Clone out so the restore action never runs under the lock.
    let handle = slot().clone();
    match handle {
        Some(handle) => handle.restore(),
        None => false,
    }
}

/// Work done by the signal handler before the process exits.
pub(crate) fn signal_cleanup() -> bool {
    info!("interrupted, restoring terminal");
    run_installed_cleanup()
}

/// Restore the terminal and exit with [`INTERRUPT_EXIT_CODE`].
pub fn interrupt_and_exit() -> ! {
    signal_cleanup();
    std::process::exit(INTERRUPT_EXIT_CODE)
}

fn register_signal_handler() {
    SIGNAL_HANDLER.get_or_init(|| {
        if let Err(err) = ctrlc::set_handler(|| {
            interrupt_and_exit();
        }) {
            warn!(%err, "could not register signal handler; relying on raw-mode key");
        }
    });
}

/// Serializes tests that touch the global slot.
#[cfg(test)]
pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
