//! Frame rendering.
//!
//! # Module Structure
//!
//! - `frame` - header/footer lines and the visible-row budget (one place)
//! - `flat` - single-column and two-column list bodies
//! - `tree` - tree level body
//! - `text` - truncation, padding and wrapping
//!
//! Renderers read the session and never mutate it.

mod flat;
pub mod frame;
pub mod text;
mod tree;

use std::io;

use crate::item::Item;
use crate::session::Session;
use crate::terminal::Terminal;
use crate::ui::context::UiContext;

pub use frame::{plan, FramePlan};

/// Layouts available to flat pickers. Tree sessions always use the tree renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlatLayout {
    #[default]
    SingleColumn,
    /// List on the left, a fixed text block on the right
    TwoColumnStatic { panel: String },
    /// List on the left, the active item's detail lines on the right
    TwoColumnDynamic,
}

/// Renderer variants, one per layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    SingleColumn,
    TwoColumnStatic,
    TwoColumnDynamic,
    Tree,
}

impl<T> Session<T> {
    pub fn renderer(&self) -> Renderer {
        match self {
            Session::Flat { layout, .. } => match layout {
                FlatLayout::SingleColumn => Renderer::SingleColumn,
                FlatLayout::TwoColumnStatic { .. } => Renderer::TwoColumnStatic,
                FlatLayout::TwoColumnDynamic => Renderer::TwoColumnDynamic,
            },
            Session::Tree { .. } => Renderer::Tree,
        }
    }
}

/// Build every line of the frame, top to bottom, for a `cols` x `rows` viewport.
pub fn compose<T: Item>(
    session: &Session<T>,
    ctx: &UiContext,
    cols: u16,
    rows: u16,
) -> (FramePlan, Vec<String>) {
    let plan = frame::plan(session, ctx, cols, rows);

    let body = match session {
        Session::Flat { state, layout, .. } => flat::body(state, layout, &plan, ctx),
        Session::Tree { state, .. } => tree::body(state, &plan, ctx),
    };

    let mut lines = Vec::with_capacity(rows as usize);
    lines.extend(plan.header.iter().cloned());
    lines.push(plan.scroll_up_line(ctx));
    lines.extend(body);
    lines.push(plan.scroll_down_line(ctx));
    lines.extend(plan.footer.iter().cloned());
    lines.truncate(rows as usize);

    (plan, lines)
}

/// Draw one frame through the terminal. Returns the plan so callers know the page size.
pub fn draw<Tm: Terminal, T: Item>(
    terminal: &mut Tm,
    session: &Session<T>,
    ctx: &UiContext,
) -> io::Result<FramePlan> {
    let (cols, rows) = terminal.size()?;
    let (plan, lines) = compose(session, ctx, cols, rows);

    terminal.clear()?;
    for (row, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        terminal.move_to(row as u16, 0)?;
        terminal.write(line)?;
    }
    terminal.flush()?;

    Ok(plan)
}
