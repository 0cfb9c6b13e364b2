//! File logging.
//!
//! The picker owns the terminal while it runs, so log output never goes to
//! stdout or stderr. Logging stays off unless a log file is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::PickerResult;

const DEFAULT_LEVEL: &str = "warn";

/// Filter directive: `-v` flags win, then the configured level
/// (`[log] level` or `TERMPICK_LOG`), then `warn`.
pub fn filter_directive(config: &LogConfig, verbose: u8) -> String {
    match verbose {
        0 => config
            .level
            .clone()
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `cli_file` overrides `[log] file`.
///
/// Returns `Ok(false)` when no log file is configured or a subscriber is
/// already installed.
pub fn init(config: &LogConfig, cli_file: Option<&Path>, verbose: u8) -> PickerResult<bool> {
    let Some(path) = cli_file.or(config.file.as_deref()) else {
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    let directive = filter_directive(config, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init()
        .is_ok();
    Ok(installed)
}
