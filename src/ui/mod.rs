//! Presentation settings: capability detection, glyphs and colors.

pub mod capabilities;
pub mod context;
pub mod theme;

pub use context::UiContext;
