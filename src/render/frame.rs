//! Frame layout math.
//!
//! The header and footer lines are produced here and nowhere else, so the
//! row budget handed to the scroll window always matches what gets drawn.
//! One row above and one below the list are reserved for scroll indicators.

use crate::item::Item;
use crate::scroll::{self, ScrollWindow};
use crate::session::Session;
use crate::state::SelectionMode;
use crate::ui::context::UiContext;
use crate::ui::theme::{paint, SemanticColor};

use super::text::truncate;

const HELP_SINGLE: &str = "[Enter] Select  [q] Quit";
const HELP_MULTI: &str =
    "[Space] Toggle  [a] All  [n] None  [i] Invert  [Enter] Confirm  [q] Quit";
const HELP_TREE: &str = "[→] Open  [←] Back  [Enter] Select  [q] Quit";
const HELP_TREE_ASCII: &str = "[Right] Open  [Left] Back  [Enter] Select  [q] Quit";
const EMPTY_FOLDER: &str = "(empty folder)";

/// Everything about a frame except the list body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    /// Usable columns
    pub width: usize,
    pub header: Vec<String>,
    pub footer: Vec<String>,
    /// Rows available to list items
    pub list_rows: usize,
    pub window: ScrollWindow,
    total: usize,
}

impl FramePlan {
    /// Header lines plus the scroll-up row.
    pub fn header_rows(&self) -> usize {
        self.header.len() + 1
    }

    /// Scroll-down row plus footer lines.
    pub fn footer_rows(&self) -> usize {
        self.footer.len() + 1
    }

    pub(crate) fn scroll_up_line(&self, ctx: &UiContext) -> String {
        if !self.window.show_scroll_up() {
            return String::new();
        }
        let text = format!("  {} {} more", ctx.glyphs.scroll_up, self.window.start);
        paint(&truncate(&text, self.width), SemanticColor::Dim, false, ctx.color)
    }

    pub(crate) fn scroll_down_line(&self, ctx: &UiContext) -> String {
        if !self.window.show_scroll_down() {
            return String::new();
        }
        let text = format!(
            "  {} {} more",
            ctx.glyphs.scroll_down,
            self.total - self.window.end
        );
        paint(&truncate(&text, self.width), SemanticColor::Dim, false, ctx.color)
    }
}

/// Rows left for the list, never less than one.
pub fn visible_rows(terminal_rows: usize, header_rows: usize, footer_rows: usize) -> usize {
    terminal_rows
        .saturating_sub(header_rows + footer_rows)
        .max(1)
}

/// Plan the frame for a `cols` x `rows` viewport.
pub fn plan<T: Item>(session: &Session<T>, ctx: &UiContext, cols: u16, rows: u16) -> FramePlan {
    let width = usize::from(cols.max(1));
    let header = header_lines(session, ctx, width);
    let footer = footer_lines(session, ctx, width);

    let list_rows = visible_rows(usize::from(rows), header.len() + 1, footer.len() + 1);
    let (total, active) = session.visible_list();
    let window = scroll::bounds(total, list_rows, active);

    FramePlan {
        width,
        header,
        footer,
        list_rows,
        window,
        total,
    }
}

fn header_lines<T: Item>(session: &Session<T>, ctx: &UiContext, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let prompt = truncate(&format!("? {}", session.prompt()), width);
    lines.push(paint(&prompt, SemanticColor::Info, true, ctx.color));

    if let Session::Tree { state, .. } = session {
        let crumb = state.breadcrumb(ctx.glyphs.breadcrumb);
        if !crumb.is_empty() {
            lines.push(paint(&truncate(&crumb, width), SemanticColor::Dim, false, ctx.color));
        }

        if let Some(meta) = state.active_item().and_then(Item::metadata) {
            let title: Vec<&str> = meta
                .icon
                .as_deref()
                .into_iter()
                .chain(meta.subtitle.as_deref())
                .collect();
            if !title.is_empty() {
                lines.push(truncate(&title.join(" "), width));
            }
            for detail in &meta.details {
                let detail = truncate(&format!("  {}", detail), width);
                lines.push(paint(&detail, SemanticColor::Dim, false, ctx.color));
            }
        }
    }

    lines
}

fn footer_lines<T: Item>(session: &Session<T>, ctx: &UiContext, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let help = match session {
        Session::Flat { state, .. } => match state.mode() {
            SelectionMode::Single => HELP_SINGLE,
            SelectionMode::Multi => {
                let status = format!("Selected: {}/{}", state.selected_count(), state.len());
                lines.push(truncate(&status, width));
                HELP_MULTI
            }
        },
        Session::Tree { state, .. } => {
            if state.showing_empty_hint() {
                let hint = truncate(EMPTY_FOLDER, width);
                lines.push(paint(&hint, SemanticColor::Warning, false, ctx.color));
            }
            if ctx.unicode {
                HELP_TREE
            } else {
                HELP_TREE_ASCII
            }
        }
    };
    lines.push(paint(&truncate(help, width), SemanticColor::Dim, false, ctx.color));
    lines
}
