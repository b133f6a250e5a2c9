//! Error types for the signup CLI.

use signup_validation::UnknownField;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (reading input or config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<UnknownField> for CliError {
    fn from(e: UnknownField) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}
