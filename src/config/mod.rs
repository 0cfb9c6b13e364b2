//! Configuration module for termpick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TERMPICK_*)
//! 3. User config (~/.config/termpick/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{ColorMode, Config, KeysConfig, LayoutConfig, LogConfig, OutputConfig};
