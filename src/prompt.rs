//! One-call pickers over the real terminal.
//!
//! ```no_run
//! use termpick::config::Config;
//! use termpick::prompt;
//! use termpick::render::FlatLayout;
//! use termpick::ui::UiContext;
//!
//! let ctx = UiContext::new(None, &Config::default());
//! let fruit = prompt::select_one("Pick a fruit", vec!["apple", "pear"], FlatLayout::default(), &ctx)?;
//! let fruit = prompt::required_one(fruit)?;
//! println!("{fruit}");
//! # Ok::<(), termpick::PickerError>(())
//! ```

use crate::behavior::{Outcome, TreeBehavior};
use crate::engine::Engine;
use crate::error::{PickerError, PickerResult};
use crate::item::Item;
use crate::render::FlatLayout;
use crate::session::Session;
use crate::state::{SelectionMode, SelectionState};
use crate::terminal::{CrosstermTerminal, Terminal};
use crate::ui::context::UiContext;

/// Run a prepared session on stderr. Fails with [`PickerError::NotATerminal`]
/// when stderr is not a terminal.
pub fn run<T: Item>(session: Session<T>, ctx: &UiContext) -> PickerResult<Outcome<T>> {
    if !ctx.caps.is_tty {
        return Err(PickerError::NotATerminal);
    }
    let mut terminal = CrosstermTerminal::new(ctx.vim_keys);
    run_on(&mut terminal, session, ctx)
}

/// Run a prepared session on any terminal.
pub fn run_on<Tm: Terminal, T: Item>(
    terminal: &mut Tm,
    session: Session<T>,
    ctx: &UiContext,
) -> PickerResult<Outcome<T>> {
    Engine::new(terminal, session, *ctx).run()
}

/// Pick one item. `Ok(None)` means the user cancelled.
pub fn select_one<T: Item>(
    prompt: &str,
    items: Vec<T>,
    layout: FlatLayout,
    ctx: &UiContext,
) -> PickerResult<Option<T>> {
    run(Session::single(prompt, items, layout), ctx).map(into_one)
}

/// Pick any number of items, starting with `defaults` checked.
/// Cancelling yields an empty list.
pub fn select_many<T: Item>(
    prompt: &str,
    items: Vec<T>,
    defaults: &[usize],
    layout: FlatLayout,
    ctx: &UiContext,
) -> PickerResult<Vec<T>> {
    let state = SelectionState::new(prompt, items, SelectionMode::Multi).with_defaults(defaults);
    run(Session::flat(state, layout), ctx).map(into_many)
}

/// Walk a tree of items and pick one selectable node.
pub fn browse<T: Item>(
    prompt: &str,
    roots: Vec<T>,
    behavior: TreeBehavior,
    ctx: &UiContext,
) -> PickerResult<Option<T>> {
    let session = Session::tree(prompt, roots).with_tree_behavior(behavior);
    run(session, ctx).map(into_one)
}

/// Treat a cancelled single pick as an error.
pub fn required_one<T>(choice: Option<T>) -> PickerResult<T> {
    choice.ok_or(PickerError::NoSelection)
}

/// Treat an empty multi pick as an error.
pub fn required_many<T>(choices: Vec<T>) -> PickerResult<Vec<T>> {
    if choices.is_empty() {
        return Err(PickerError::NoSelection);
    }
    Ok(choices)
}

pub fn into_one<T>(outcome: Outcome<T>) -> Option<T> {
    match outcome {
        Outcome::FinishSingle(choice) => choice,
        Outcome::FinishMulti(choices) => choices.into_iter().next(),
        Outcome::Continue => None,
    }
}

pub fn into_many<T>(outcome: Outcome<T>) -> Vec<T> {
    match outcome {
        Outcome::FinishSingle(choice) => choice.into_iter().collect(),
        Outcome::FinishMulti(choices) => choices,
        Outcome::Continue => Vec::new(),
    }
}
