//! The picker loop.
//!
//! [`Engine::run`] owns one [`Session`] and borrows a [`Terminal`]. It claims
//! the interrupt slot, enters raw mode, draws, and feeds keys to the session
//! until an outcome is reached. A drop guard restores the terminal and frees
//! the slot on every exit path, panics included.

use tracing::{debug, info};

use crate::behavior::Outcome;
use crate::error::{PickerError, PickerResult};
use crate::interrupt;
use crate::item::Item;
use crate::render;
use crate::session::Session;
use crate::terminal::{Key, RestoreHandle, Terminal};
use crate::ui::context::UiContext;

/// Restores the terminal and releases the interrupt slot when dropped.
struct SessionGuard {
    restore: RestoreHandle,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.restore.restore() {
            debug!("terminal restored");
        }
        interrupt::uninstall();
    }
}

pub struct Engine<'t, Tm: Terminal, T: Item> {
    terminal: &'t mut Tm,
    session: Session<T>,
    ctx: UiContext,
    exit_on_interrupt: bool,
}

impl<'t, Tm: Terminal, T: Item> Engine<'t, Tm, T> {
    pub fn new(terminal: &'t mut Tm, session: Session<T>, ctx: UiContext) -> Self {
        Self {
            terminal,
            session,
            ctx,
            exit_on_interrupt: true,
        }
    }

    /// When false, Ctrl-C read as a key restores the terminal and returns
    /// [`PickerError::Interrupted`] instead of exiting the process.
    pub fn exit_on_interrupt(mut self, exit: bool) -> Self {
        self.exit_on_interrupt = exit;
        self
    }

    /// Run until the session finishes. Never returns `Outcome::Continue`.
    pub fn run(mut self) -> PickerResult<Outcome<T>> {
        let restore = self.terminal.restore_handle();
        interrupt::install(restore.clone())?;
        let _guard = SessionGuard { restore };

        info!(
            prompt = self.session.prompt(),
            renderer = ?self.session.renderer(),
            "picker session started"
        );

        self.terminal.enter()?;
        let mut plan = render::draw(self.terminal, &self.session, &self.ctx)?;

        loop {
            match self.terminal.read_key()? {
                Key::Interrupt => {
                    if self.exit_on_interrupt {
                        interrupt::interrupt_and_exit();
                    }
                    interrupt::run_installed_cleanup();
                    info!("picker session interrupted");
                    return Err(PickerError::Interrupted);
                }
                Key::Other => continue,
                Key::Resize => {}
                key => {
                    let outcome = self.session.handle_key(key, plan.list_rows);
                    if outcome.is_finished() {
                        log_finish(&outcome);
                        return Ok(outcome);
                    }
                }
            }
            plan = render::draw(self.terminal, &self.session, &self.ctx)?;
        }
    }
}

fn log_finish<T>(outcome: &Outcome<T>) {
    match outcome {
        Outcome::FinishSingle(choice) => {
            info!(selected = choice.is_some(), "picker session finished")
        }
        Outcome::FinishMulti(choices) => {
            info!(selected = choices.len(), "picker session finished")
        }
        Outcome::Continue => {}
    }
}
