//! Key handling strategies.
//!
//! A behavior maps a decoded key plus the current state to either a state
//! mutation (`Outcome::Continue`) or a terminal outcome. Flat lists use
//! [`FlatBehavior`]; tree browsing uses [`TreeBehavior`].

use crate::item::Item;
use crate::state::{SelectionMode, SelectionState, TreeNavigationState};
use crate::terminal::{Action, Direction, Jump};

/// Result of handling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Keep looping
    Continue,
    /// Single-select or tree finished; `None` means cancelled
    FinishSingle(Option<T>),
    /// Multi-select finished; cancelling yields an empty list
    FinishMulti(Vec<T>),
}

impl<T> Outcome<T> {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Move within a list of `len` items for a jump key. `page` is the visible-row budget.
fn jump_target(current: usize, len: usize, jump: Jump, page: usize) -> usize {
    let page = page.max(1);
    match jump {
        Jump::Home => 0,
        Jump::End => len.saturating_sub(1),
        Jump::PageUp => current.saturating_sub(page),
        Jump::PageDown => current.saturating_add(page),
    }
}

/// Flat list behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatBehavior {
    SingleSelect,
    MultiSelect,
}

impl FlatBehavior {
    pub fn for_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::SingleSelect,
            SelectionMode::Multi => Self::MultiSelect,
        }
    }

    /// Up/down move by one, clamped. Left/right do nothing in flat lists.
    pub fn handle_arrow<T>(self, state: &mut SelectionState<T>, direction: Direction) {
        match direction {
            Direction::Up => {
                state.move_by(-1);
            }
            Direction::Down => {
                state.move_by(1);
            }
            Direction::Left | Direction::Right => {}
        }
    }

    pub fn handle_jump<T>(self, state: &mut SelectionState<T>, jump: Jump, page: usize) {
        let target = jump_target(state.active_index(), state.len(), jump, page);
        state.set_active(target);
    }

    pub fn handle_action<T: Clone>(
        self,
        state: &mut SelectionState<T>,
        action: Action,
    ) -> Outcome<T> {
        match self {
            FlatBehavior::SingleSelect => match action {
                Action::Enter => Outcome::FinishSingle(state.active_item()),
                Action::Quit => Outcome::FinishSingle(None),
                _ => Outcome::Continue,
            },
            FlatBehavior::MultiSelect => match action {
                Action::Space => {
                    state.toggle_active();
                    Outcome::Continue
                }
                Action::SelectAll => {
                    state.select_all();
                    Outcome::Continue
                }
                Action::SelectNone => {
                    state.select_none();
                    Outcome::Continue
                }
                Action::Invert => {
                    state.invert();
                    Outcome::Continue
                }
                Action::Enter => Outcome::FinishMulti(state.selected_items()),
                Action::Quit => Outcome::FinishMulti(Vec::new()),
                Action::Backspace => Outcome::Continue,
            },
        }
    }
}

/// Tree navigation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBehavior {
    /// Space descends like right arrow
    pub space_descends: bool,
}

impl Default for TreeBehavior {
    fn default() -> Self {
        Self {
            space_descends: true,
        }
    }
}

impl TreeBehavior {
    pub fn handle_arrow<T: Item>(self, state: &mut TreeNavigationState<T>, direction: Direction) {
        match direction {
            Direction::Up => {
                state.move_by(-1);
            }
            Direction::Down => {
                state.move_by(1);
            }
            Direction::Right => {
                state.descend();
            }
            Direction::Left => {
                state.ascend();
            }
        }
    }

    pub fn handle_jump<T: Item>(self, state: &mut TreeNavigationState<T>, jump: Jump, page: usize) {
        let level = state.current();
        let target = jump_target(level.active_index(), level.items.len(), jump, page);
        state.set_active(target);
    }

    pub fn handle_action<T: Item>(
        self,
        state: &mut TreeNavigationState<T>,
        action: Action,
    ) -> Outcome<T> {
        match action {
            Action::Space if self.space_descends => {
                state.descend();
                Outcome::Continue
            }
            Action::Backspace => {
                state.ascend();
                Outcome::Continue
            }
            Action::Enter => match state.active_item() {
                Some(item) if item.is_selectable() => Outcome::FinishSingle(Some(item.clone())),
                _ => Outcome::Continue,
            },
            Action::Quit => Outcome::FinishSingle(None),
            _ => Outcome::Continue,
        }
    }
}
