//! Property tests for the scroll window calculator.

use proptest::prelude::*;

use termpick::scroll::bounds;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the window holds min(rows, total) items.
    #[test]
    fn property_window_size(total in 0usize..500, rows in 0usize..80, active in 0usize..600) {
        let w = bounds(total, rows, active);
        prop_assert_eq!(w.end - w.start, rows.max(1).min(total));
    }

    /// PROPERTY: 0 <= start <= end <= total.
    #[test]
    fn property_window_in_range(total in 0usize..500, rows in 0usize..80, active in 0usize..600) {
        let w = bounds(total, rows, active);
        prop_assert!(w.start <= w.end);
        prop_assert!(w.end <= total);
    }

    /// PROPERTY: the active item is always on screen.
    #[test]
    fn property_active_visible(total in 1usize..500, rows in 1usize..80, active in 0usize..500) {
        let active = active % total;
        let w = bounds(total, rows, active);
        prop_assert!(w.start <= active && active < w.end);
    }

    /// PROPERTY: same input, same window.
    #[test]
    fn property_pure(total in 0usize..500, rows in 0usize..80, active in 0usize..600) {
        prop_assert_eq!(bounds(total, rows, active), bounds(total, rows, active));
    }
}

#[test]
fn centers_active_item() {
    let w = bounds(100, 10, 50);
    assert_eq!((w.start, w.end), (45, 55));
}

#[test]
fn clamps_at_edges() {
    let w = bounds(20, 10, 19);
    assert_eq!((w.start, w.end), (10, 20));
    let w = bounds(20, 10, 0);
    assert_eq!((w.start, w.end), (0, 10));
}
