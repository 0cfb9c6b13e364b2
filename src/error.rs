//! Error types for termpick
//!
//! Uses `thiserror` for library errors. Cancellation is not an error: it is
//! reported through `Outcome`, and only the `required_*` wrappers turn it
//! into [`PickerError::NoSelection`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Main error type for picker operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// Terminal I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Another engine run already owns the interrupt hook
    #[error("a picker session is already active in this process")]
    SessionActive,

    /// Ctrl-C ended the session and the engine was told not to exit the process
    #[error("interrupted")]
    Interrupted,

    /// Input or output is not attached to a terminal
    #[error("not attached to a terminal")]
    NotATerminal,

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The user finished without choosing anything where a choice was required
    #[error("no selection made")]
    NoSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_config() {
        let err = PickerError::Config {
            file: PathBuf::from("/home/u/.config/termpick/config.toml"),
            message: "expected a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in /home/u/.config/termpick/config.toml: expected a boolean"
        );
    }

    #[test]
    fn error_display_no_selection() {
        assert_eq!(PickerError::NoSelection.to_string(), "no selection made");
    }

    #[test]
    fn io_error_converts() {
        let err: PickerError = std::io::Error::other("boom").into();
        assert!(matches!(err, PickerError::Io(_)));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}
