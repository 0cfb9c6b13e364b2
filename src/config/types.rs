//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PickerResult;

use super::loader::{self, ConfigWarning};

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Key binding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Accept `hjkl` and `g`/`G` in addition to the arrow keys
    #[serde(default = "default_true")]
    pub vim: bool,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self { vim: true }
    }
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Left column share of the width in two-column layouts, in percent
    #[serde(default = "default_left_percent")]
    pub left_percent: u16,

    /// Show dot-files when browsing the filesystem
    #[serde(default)]
    pub show_hidden: bool,
}

pub const MIN_LEFT_PERCENT: u16 = 10;
pub const MAX_LEFT_PERCENT: u16 = 90;

fn default_left_percent() -> u16 {
    33
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_percent: default_left_percent(),
            show_hidden: false,
        }
    }
}

impl LayoutConfig {
    /// `left_percent` clamped to a usable range.
    pub fn left_percent(&self) -> u16 {
        self.left_percent.clamp(MIN_LEFT_PERCENT, MAX_LEFT_PERCENT)
    }
}

/// Diagnostic log configuration. Logging is off without a file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `debug` or `termpick=trace`
    #[serde(default)]
    pub level: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PickerResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config, or defaults, with env overrides applied
    pub fn load_or_default() -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default()
    }

    /// Apply TERMPICK_* environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Path of the user config file, if a config directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        loader::user_config_path()
    }
}
