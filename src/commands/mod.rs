//! Subcommand handlers for the `termpick` binary.

pub mod browse;
pub mod output;
pub mod pick;

use termpick::{Config, UiContext};

/// Settings shared by every subcommand.
pub struct Globals {
    pub config: Config,
    pub ctx: UiContext,
    pub json: bool,
}
