//! termpick - interactive terminal pickers
//!
//! Pick one item, several items, or walk a lazily loaded tree, from a full
//! screen list drawn on stderr. State, key handling and rendering are kept
//! apart: a [`Session`] pairs a state with its behavior and layout, and the
//! [`Engine`] drives it against a [`Terminal`] until an [`Outcome`] is reached.
//! The terminal is restored exactly once on every exit path, including Ctrl-C.

pub mod behavior;
pub mod config;
pub mod engine;
pub mod error;
pub mod fs;
pub mod interrupt;
pub mod item;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod scroll;
pub mod session;
pub mod state;
pub mod terminal;
pub mod ui;

// Re-exports for convenience
pub use behavior::{FlatBehavior, Outcome, TreeBehavior};
pub use config::Config;
pub use engine::Engine;
pub use error::{PickerError, PickerResult};
pub use fs::{BrowseOptions, FsNode};
pub use item::{Item, ItemMetadata, TextItem};
pub use render::{FlatLayout, Renderer};
pub use scroll::ScrollWindow;
pub use session::Session;
pub use state::{SelectionMode, SelectionState, TreeNavigationState};
pub use terminal::{CrosstermTerminal, Key, RestoreHandle, Terminal};
pub use ui::UiContext;
