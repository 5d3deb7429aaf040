//! Custom error types for noisy-typer.
//!
//! Every fallible library operation returns [`TyperError`]; the binary wraps
//! it in `anyhow` for context.

use thiserror::Error;

/// Main error type for noisy-typer operations.
#[derive(Error, Debug)]
pub enum TyperError {
    /// A configuration value is out of range.
    #[error("{0}")]
    ConfigValidation(String),

    /// Error reading or parsing configuration file.
    #[error("failed to load config from '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },

    /// Error writing configuration file.
    #[error("failed to save config to '{path}': {reason}")]
    ConfigSave { path: String, reason: String },

    /// Error parsing duration string.
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    /// Neither `--text` nor the clipboard supplied anything to type.
    #[error("No text provided and clipboard is empty.")]
    NoText,

    /// The clipboard could not be opened or read.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The OS refused to create or deliver synthetic input.
    #[error("failed to inject '{input}': {reason}")]
    Injection { input: String, reason: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for noisy-typer operations.
pub type Result<T> = std::result::Result<T, TyperError>;

impl TyperError {
    /// Create a new ConfigValidation error.
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation(message.into())
    }

    /// Create a new ConfigLoad error.
    pub fn config_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new ConfigSave error.
    pub fn config_save(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigSave {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new InvalidDuration error.
    pub fn invalid_duration(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new Clipboard error.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Create a new Injection error.
    pub fn injection(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Injection {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TyperError::NoText.to_string(),
            "No text provided and clipboard is empty."
        );

        let err = TyperError::config_validation("--cps must be greater than zero.");
        assert_eq!(err.to_string(), "--cps must be greater than zero.");

        let err = TyperError::injection("backspace", "input denied");
        assert_eq!(err.to_string(), "failed to inject 'backspace': input denied");

        let err = TyperError::invalid_duration("5x", "unknown unit");
        assert_eq!(err.to_string(), "invalid duration '5x': unknown unit");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: TyperError = json_err.into();
        assert!(matches!(err, TyperError::Json(_)));
    }
}
