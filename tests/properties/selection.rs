//! Property tests for flat selection under arbitrary key sequences.

use proptest::prelude::*;

use termpick::terminal::{Action, Direction, Jump, Key};
use termpick::{FlatLayout, Outcome, Session};

fn flat_key() -> impl Strategy<Value = Key> {
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
        Key::Action(Action::SelectAll),
        Key::Action(Action::SelectNone),
        Key::Action(Action::Invert),
        Key::Action(Action::Backspace),
        Key::Other,
        Key::Resize,
    ])
}

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: navigation keys never finish a session and never move the
    /// cursor outside the list.
    #[test]
    fn property_cursor_stays_in_list(
        len in 0usize..40,
        page in 1usize..20,
        keys in prop::collection::vec(flat_key(), 0..60),
    ) {
        let mut session = Session::multi("Pick", items(len), FlatLayout::SingleColumn);
        for key in keys {
            prop_assert_eq!(session.handle_key(key, page), Outcome::Continue);
            let (total, active) = session.visible_list();
            prop_assert_eq!(total, len);
            prop_assert!(active < len.max(1));
        }
    }

    /// PROPERTY: multi-select Enter returns exactly the checked items, in list order.
    #[test]
    fn property_multi_enter_returns_selection_in_order(
        len in 1usize..30,
        keys in prop::collection::vec(flat_key(), 0..60),
    ) {
        let mut session = Session::multi("Pick", items(len), FlatLayout::SingleColumn);
        for key in keys {
            session.handle_key(key, 5);
        }
        let expected: Vec<String> = match &session {
            Session::Flat { state, .. } => state.selected_items(),
            Session::Tree { .. } => unreachable!(),
        };
        let outcome = session.handle_key(Key::Action(Action::Enter), 5);
        let Outcome::FinishMulti(picked) = outcome else {
            panic!("multi-select must finish with a list");
        };
        let indices: Vec<usize> = picked
            .iter()
            .map(|p| items(len).iter().position(|i| i == p).unwrap())
            .collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(picked, expected);
    }

    /// PROPERTY: single-select Enter returns the item under the cursor.
    #[test]
    fn property_single_enter_returns_active(
        len in 1usize..30,
        keys in prop::collection::vec(flat_key(), 0..60),
    ) {
        let mut session = Session::single("Pick", items(len), FlatLayout::SingleColumn);
        for key in keys {
            session.handle_key(key, 5);
        }
        let (_, active) = session.visible_list();
        prop_assert_eq!(
            session.handle_key(Key::Action(Action::Enter), 5),
            Outcome::FinishSingle(Some(format!("item {active}")))
        );
    }
}
