//! Error handling module for the brct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the brct CLI application.
///
/// These are the fatal conditions that abort before or outside scanning;
/// balance defects themselves are diagnostics, not errors of this type.
#[derive(Error, Debug)]
pub enum BrctError {
    /// Error when loading or parsing the configuration fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading the input file fails (missing file, permission
    /// problems, or invalid UTF-8).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BrctError.
pub type Result<T> = std::result::Result<T, BrctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BrctError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BrctError = io_err.into();
        assert!(matches!(err, BrctError::Io(_)));
        assert_eq!(err.to_string(), "IO error: file not found");
    }
}
