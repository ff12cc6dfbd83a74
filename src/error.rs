//! Error types for mode assignment and settings loading.

use thiserror::Error;

/// Errors raised at the mode-assignment call boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// A mode was requested with nothing to call when it fires
    #[error("mode \"{label}\" assigned without a callback")]
    MissingCallback { label: String },
}

/// Errors that can occur while loading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
