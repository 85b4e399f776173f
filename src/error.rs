//! Error types for timer documents and editor settings.
//!
//! Tree edits, flattening and time parsing never fail: a missing id is a
//! no-op and malformed time input degrades to zero. Errors only surface at the
//! boundaries where data enters or leaves the crate:
//!
//! - **Parse Errors**: a stored timer document or settings file is not valid JSON/YAML
//! - **Structure Errors**: a loaded tree breaks an invariant (duplicate ids, zero loops)
//! - **Settings Errors**: a settings file could not be read, or holds invalid values
//! - **Serialize Errors**: a tree could not be written back out
//!
//! ```rust
//! use interval_timer::TimerError;
//!
//! let error = TimerError::invalid_structure("duplicate id", Some("4".to_string()));
//! if error.is_user_fixable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for timer operations.
pub type Result<T, E = TimerError> = std::result::Result<T, E>;

/// Main error type for timer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TimerError {
    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Invalid timer structure: {reason}")]
    InvalidStructure { reason: String, item_id: Option<String> },

    #[error("Settings file error: {path}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid setting '{key}': {details}")]
    InvalidSetting { key: String, details: String },

    #[error("Failed to serialize timer: {details}")]
    Serialize { details: String },
}

impl TimerError {
    /// Returns whether the user can fix this by editing the document or file.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            TimerError::Parse { .. } => true,
            TimerError::InvalidStructure { .. } => true,
            TimerError::Settings { .. } => true,
            TimerError::InvalidSetting { .. } => true,
            TimerError::Serialize { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            TimerError::Parse { .. } => vec![
                "Check the document is valid JSON or YAML",
                "Verify every item has either duration and type, or loops and items",
                "Restore the timer from a template",
            ],
            TimerError::InvalidStructure { .. } => vec![
                "Remove or rename items with duplicate ids",
                "Set every loop to repeat at least once",
                "Re-save the timer from the editor",
            ],
            TimerError::Settings { .. } => vec![
                "Check the settings file exists and is readable",
                "Check file permissions",
                "Fall back to default settings",
            ],
            TimerError::InvalidSetting { .. } => vec![
                "Check the value is within the allowed range",
                "Remove the key to use its default",
            ],
            TimerError::Serialize { .. } => vec![
                "Report this as a bug with the timer that failed",
                "Retry the save",
            ],
        }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        TimerError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for structural violations.
    pub fn invalid_structure(reason: impl Into<String>, item_id: Option<String>) -> Self {
        TimerError::InvalidStructure { reason: reason.into(), item_id }
    }

    /// Helper constructor for settings file errors with path context.
    pub fn settings_error(path: PathBuf, source: std::io::Error) -> Self {
        TimerError::Settings { path, source }
    }

    /// Helper constructor for out-of-range setting values.
    pub fn invalid_setting(key: impl Into<String>, details: impl Into<String>) -> Self {
        TimerError::InvalidSetting { key: key.into(), details: details.into() }
    }
}

impl From<serde_json::Error> for TimerError {
    fn from(err: serde_json::Error) -> Self {
        TimerError::Parse { context: "timer document".to_string(), details: err.to_string() }
    }
}

impl From<serde_yaml_ng::Error> for TimerError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        TimerError::Parse { context: "editor settings".to_string(), details: err.to_string() }
    }
}
