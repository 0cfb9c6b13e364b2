//! One picker run's state, behavior and renderer.
//!
//! The arms of [`Session`] are the only legal pairings: flat state with a
//! flat behavior and a flat layout, or tree state with tree navigation and
//! the tree renderer. Dispatch is a plain `match`.

use tracing::trace;

use crate::behavior::{FlatBehavior, Outcome, TreeBehavior};
use crate::item::Item;
use crate::render::FlatLayout;
use crate::state::{SelectionMode, SelectionState, TreeNavigationState};
use crate::terminal::Key;

#[derive(Debug, Clone)]
pub enum Session<T> {
    Flat {
        state: SelectionState<T>,
        behavior: FlatBehavior,
        layout: FlatLayout,
    },
    Tree {
        state: TreeNavigationState<T>,
        behavior: TreeBehavior,
    },
}

impl<T: Item> Session<T> {
    pub fn single(prompt: impl Into<String>, items: Vec<T>, layout: FlatLayout) -> Self {
        Self::flat(SelectionState::new(prompt, items, SelectionMode::Single), layout)
    }

    pub fn multi(prompt: impl Into<String>, items: Vec<T>, layout: FlatLayout) -> Self {
        Self::flat(SelectionState::new(prompt, items, SelectionMode::Multi), layout)
    }

    /// Wrap a prepared selection state (e.g. with defaults or a start index).
    pub fn flat(state: SelectionState<T>, layout: FlatLayout) -> Self {
        Session::Flat {
            behavior: FlatBehavior::for_mode(state.mode()),
            state,
            layout,
        }
    }

    pub fn tree(prompt: impl Into<String>, roots: Vec<T>) -> Self {
        Session::Tree {
            state: TreeNavigationState::new(prompt, roots),
            behavior: TreeBehavior::default(),
        }
    }

    pub fn with_tree_behavior(mut self, tree_behavior: TreeBehavior) -> Self {
        if let Session::Tree { behavior, .. } = &mut self {
            *behavior = tree_behavior;
        }
        self
    }

    pub fn prompt(&self) -> &str {
        match self {
            Session::Flat { state, .. } => state.prompt(),
            Session::Tree { state, .. } => state.prompt(),
        }
    }

    /// Item count and active index of the list currently on screen.
    pub fn visible_list(&self) -> (usize, usize) {
        match self {
            Session::Flat { state, .. } => (state.len(), state.active_index()),
            Session::Tree { state, .. } => {
                let level = state.current();
                (level.items.len(), level.active_index())
            }
        }
    }

    /// Dispatch one decoded key. `page` is the current visible-row budget.
    ///
    /// Interrupt, resize and unknown keys are handled by the engine and
    /// always yield `Continue` here.
    pub fn handle_key(&mut self, key: Key, page: usize) -> Outcome<T> {
        trace!(?key, "handle key");
        match self {
            Session::Flat {
                state, behavior, ..
            } => match key {
                Key::Direction(direction) => {
                    behavior.handle_arrow(state, direction);
                    Outcome::Continue
                }
                Key::Jump(jump) => {
                    behavior.handle_jump(state, jump, page);
                    Outcome::Continue
                }
                Key::Action(action) => behavior.handle_action(state, action),
                Key::Interrupt | Key::Resize | Key::Other => Outcome::Continue,
            },
            Session::Tree { state, behavior } => match key {
                Key::Direction(direction) => {
                    behavior.handle_arrow(state, direction);
                    Outcome::Continue
                }
                Key::Jump(jump) => {
                    behavior.handle_jump(state, jump, page);
                    Outcome::Continue
                }
                Key::Action(action) => behavior.handle_action(state, action),
                Key::Interrupt | Key::Resize | Key::Other => Outcome::Continue,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{sample_roots, Node};
    use crate::terminal::{Action, Direction, Jump};

    #[test]
    fn single_session_uses_single_behavior() {
        let session = Session::single("Pick", vec!["a", "b"], FlatLayout::SingleColumn);
        match session {
            Session::Flat { behavior, .. } => assert_eq!(behavior, FlatBehavior::SingleSelect),
            Session::Tree { .. } => panic!("expected flat session"),
        }
    }

    #[test]
    fn multi_session_finishes_with_selection() {
        let mut session = Session::multi("Pick", vec!["a", "b", "c"], FlatLayout::TwoColumnDynamic);
        session.handle_key(Key::Direction(Direction::Down), 5);
        session.handle_key(Key::Action(Action::Space), 5);
        assert_eq!(
            session.handle_key(Key::Action(Action::Enter), 5),
            Outcome::FinishMulti(vec!["b"])
        );
    }

    #[test]
    fn unknown_keys_continue_without_change() {
        let mut session = Session::single("Pick", vec!["a", "b"], FlatLayout::SingleColumn);
        assert_eq!(session.handle_key(Key::Other, 5), Outcome::Continue);
        assert_eq!(session.handle_key(Key::Resize, 5), Outcome::Continue);
        assert_eq!(session.visible_list(), (2, 0));
    }

    #[test]
    fn tree_session_reports_current_level() {
        let mut session = Session::tree("Browse", sample_roots());
        assert_eq!(session.visible_list(), (3, 0));
        session.handle_key(Key::Direction(Direction::Right), 5);
        session.handle_key(Key::Jump(Jump::End), 5);
        assert_eq!(session.visible_list(), (3, 2));
        assert_eq!(
            session.handle_key(Key::Action(Action::Enter), 5),
            Outcome::FinishSingle(Some(Node::leaf("Todo")))
        );
    }

    #[test]
    fn prompt_is_shared_across_modes() {
        let flat: Session<&str> = Session::single("One", vec![], FlatLayout::SingleColumn);
        let tree: Session<Node> = Session::tree("Two", vec![]);
        assert_eq!(flat.prompt(), "One");
        assert_eq!(tree.prompt(), "Two");
    }
}
