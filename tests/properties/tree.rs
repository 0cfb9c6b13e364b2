//! Property tests for tree navigation under arbitrary key sequences.

use std::borrow::Cow;

use proptest::prelude::*;

use termpick::terminal::{Action, Direction, Jump, Key};
use termpick::{Item, Outcome, Session};

#[derive(Debug, Clone, PartialEq)]
struct Node {
    name: String,
    /// `None` for a leaf, `Some` (possibly empty) for a folder
    kids: Option<Vec<Node>>,
}

impl Item for Node {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn has_children(&self) -> bool {
        self.kids.is_some()
    }

    fn children(&self) -> Vec<Self> {
        self.kids.clone().unwrap_or_default()
    }

    fn is_selectable(&self) -> bool {
        self.kids.is_none()
    }
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = "[a-z]{1,6}".prop_map(|name| Node { name, kids: None });
    leaf.prop_recursive(4, 64, 5, |inner| {
        ("[A-Z]{1,6}", prop::collection::vec(inner, 0..5)).prop_map(|(name, kids)| Node {
            name,
            kids: Some(kids),
        })
    })
}

fn tree_key() -> impl Strategy<Value = Key> {
    prop::sample::select(vec![
        Key::Direction(Direction::Up),
        Key::Direction(Direction::Down),
        Key::Direction(Direction::Left),
        Key::Direction(Direction::Right),
        Key::Jump(Jump::Home),
        Key::Jump(Jump::End),
        Key::Jump(Jump::PageUp),
        Key::Jump(Jump::PageDown),
        Key::Action(Action::Space),
        Key::Action(Action::Backspace),
        Key::Other,
    ])
}

fn tree_state(session: &Session<Node>) -> &termpick::TreeNavigationState<Node> {
    match session {
        Session::Tree { state, .. } => state,
        Session::Flat { .. } => unreachable!(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: navigation keys keep the stack and cursor consistent.
    #[test]
    fn property_navigation_stays_consistent(
        roots in prop::collection::vec(node(), 0..6),
        keys in prop::collection::vec(tree_key(), 0..80),
    ) {
        let mut session = Session::tree("Browse", roots.clone());
        for key in keys {
            prop_assert_eq!(session.handle_key(key, 3), Outcome::Continue);
            let state = tree_state(&session);

            prop_assert!(state.depth() >= 1);
            // Only the root level can be empty.
            prop_assert!(state.levels()[1..].iter().all(|l| !l.is_empty()));

            let (total, active) = session.visible_list();
            prop_assert!(active < total.max(1));

            if !roots.is_empty() {
                let crumb = state.breadcrumb(" / ");
                prop_assert_eq!(crumb.split(" / ").count(), state.depth());
            }

            if state.showing_empty_hint() {
                let item = state.active_item().unwrap();
                prop_assert!(item.has_children());
                prop_assert!(item.children().is_empty());
            }
        }
    }

    /// PROPERTY: entering a non-empty folder and going back restores depth and cursor.
    #[test]
    fn property_descend_ascend_round_trip(
        roots in prop::collection::vec(node(), 1..6),
        keys in prop::collection::vec(tree_key(), 0..40),
    ) {
        let mut session = Session::tree("Browse", roots);
        for key in keys {
            session.handle_key(key, 3);
        }

        let state = tree_state(&session);
        let before = (state.depth(), session.visible_list());
        let enterable = state
            .active_item()
            .is_some_and(|item| !item.children().is_empty());

        session.handle_key(Key::Direction(Direction::Right), 3);
        if enterable {
            prop_assert_eq!(tree_state(&session).depth(), before.0 + 1);
            session.handle_key(Key::Direction(Direction::Left), 3);
        }
        prop_assert_eq!((tree_state(&session).depth(), session.visible_list()), before);
    }
}
