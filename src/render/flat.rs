//! Flat list bodies: single column and the two-column panels.

use crate::item::Item;
use crate::state::{SelectionMode, SelectionState};
use crate::ui::context::UiContext;
use crate::ui::theme::{paint, SemanticColor};

use super::frame::FramePlan;
use super::text::{pad, truncate, width, wrap};
use super::FlatLayout;

const NO_ITEMS: &str = "  (no items)";

/// A styled line together with its plain display width.
pub(super) struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    pub(super) fn plain(text: String) -> Self {
        let width = width(&text);
        Self { text, width }
    }

    /// Pad with spaces to `columns` using the plain width.
    pub(super) fn padded(self, columns: usize) -> String {
        if self.width >= columns {
            return self.text;
        }
        format!("{}{}", self.text, " ".repeat(columns - self.width))
    }
}

/// Cursor column shared by flat and tree rows: glyph on the active row, blanks elsewhere.
pub(super) fn cursor_prefix(active: bool, ctx: &UiContext) -> Cell {
    let glyph = ctx.glyphs.cursor;
    if active {
        Cell {
            text: format!("{} ", paint(glyph, SemanticColor::Info, true, ctx.color)),
            width: width(glyph) + 1,
        }
    } else {
        Cell::plain(" ".repeat(width(glyph) + 1))
    }
}

pub(super) fn empty_row(columns: usize, ctx: &UiContext) -> Cell {
    let text = truncate(NO_ITEMS, columns);
    Cell {
        width: width(&text),
        text: paint(&text, SemanticColor::Dim, false, ctx.color),
    }
}

pub(super) fn body<T: Item>(
    state: &SelectionState<T>,
    layout: &FlatLayout,
    plan: &FramePlan,
    ctx: &UiContext,
) -> Vec<String> {
    match layout {
        FlatLayout::SingleColumn => list_cells(state, plan, plan.width, ctx)
            .into_iter()
            .map(|c| c.text)
            .collect(),
        FlatLayout::TwoColumnStatic { panel } => {
            let (left_w, right_w) = split(plan.width, ctx.left_percent);
            let right = panel.lines().map(|l| truncate(l, right_w)).collect();
            two_column(state, plan, ctx, left_w, right_w, right)
        }
        FlatLayout::TwoColumnDynamic => {
            let (left_w, right_w) = split(plan.width, ctx.left_percent);
            let detail = state
                .active()
                .map(|o| o.item.detail().join("\n"))
                .unwrap_or_default();
            let right = wrap(&detail, right_w);
            two_column(state, plan, ctx, left_w, right_w, right)
        }
    }
}

/// Column widths for two-column layouts: `(left, right)`, with three columns
/// between them for the separator.
pub fn split(total: usize, left_percent: u16) -> (usize, usize) {
    let left = total * usize::from(left_percent) / 100;
    let right = total.saturating_sub(left + 3);
    (left, right)
}

fn list_cells<T: Item>(
    state: &SelectionState<T>,
    plan: &FramePlan,
    columns: usize,
    ctx: &UiContext,
) -> Vec<Cell> {
    if state.is_empty() {
        return vec![empty_row(columns, ctx)];
    }

    state.options()[plan.window.range()]
        .iter()
        .enumerate()
        .map(|(offset, option)| {
            let active = plan.window.start + offset == state.active_index();
            let prefix = cursor_prefix(active, ctx);

            let marker = match state.mode() {
                SelectionMode::Single => Cell::plain(String::new()),
                SelectionMode::Multi if option.selected => Cell {
                    text: format!(
                        "{} ",
                        paint(ctx.glyphs.selected, SemanticColor::Success, false, ctx.color)
                    ),
                    width: width(ctx.glyphs.selected) + 1,
                },
                SelectionMode::Multi => Cell::plain(format!("{} ", ctx.glyphs.unselected)),
            };

            let budget = columns.saturating_sub(prefix.width + marker.width);
            let name = truncate(&option.item.name(), budget);
            let name_width = width(&name);
            let name = if active {
                paint(&name, SemanticColor::Info, true, ctx.color)
            } else {
                name
            };

            let used = prefix.width + marker.width + name_width;
            if used > columns {
                // Column narrower than the cursor and marker.
                return Cell::plain(String::new());
            }
            Cell {
                text: format!("{}{}{}", prefix.text, marker.text, name),
                width: used,
            }
        })
        .collect()
}

fn two_column<T: Item>(
    state: &SelectionState<T>,
    plan: &FramePlan,
    ctx: &UiContext,
    left_w: usize,
    right_w: usize,
    right: Vec<String>,
) -> Vec<String> {
    if left_w == 0 || right_w == 0 {
        return list_cells(state, plan, plan.width, ctx)
            .into_iter()
            .map(|c| c.text)
            .collect();
    }

    let separator = if ctx.unicode { " │ " } else { " | " };
    let separator = paint(separator, SemanticColor::Dim, false, ctx.color);

    let left = list_cells(state, plan, left_w, ctx);
    let rows = left.len().max(right.len().min(plan.list_rows));

    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let l = left
                .next()
                .map(|c| c.padded(left_w))
                .unwrap_or_else(|| pad("", left_w));
            let r = right.next().unwrap_or_default();
            format!("{}{}{}", l, separator, r).trim_end().to_string()
        })
        .collect()
}
