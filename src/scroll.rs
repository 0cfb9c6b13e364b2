//! Scroll window calculation.
//!
//! Decides which contiguous slice of a list is visible for a viewport of
//! `visible_rows` lines, keeping the active item centered where possible.

/// Half-open range `[start, end)` of visible item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollWindow {
    pub start: usize,
    pub end: usize,
    total: usize,
}

impl ScrollWindow {
    /// Number of visible rows actually occupied by items.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether items exist above the window.
    pub fn show_scroll_up(&self) -> bool {
        self.start > 0
    }

    /// Whether items exist below the window.
    pub fn show_scroll_down(&self) -> bool {
        self.end < self.total
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Compute the visible window for `total_items` items.
///
/// The active item is centered (`start = active - visible_rows / 2`) and the
/// start is clamped so the window never scrolls above the top nor leaves
/// blank rows at the bottom when enough items exist to fill it.
pub fn bounds(total_items: usize, visible_rows: usize, active_index: usize) -> ScrollWindow {
    let visible_rows = visible_rows.max(1);
    if total_items == 0 {
        return ScrollWindow::default();
    }

    let active = active_index.min(total_items - 1);
    let max_start = total_items.saturating_sub(visible_rows);
    let start = active.saturating_sub(visible_rows / 2).min(max_start);
    let end = total_items.min(start + visible_rows);

    ScrollWindow {
        start,
        end,
        total: total_items,
    }
}
