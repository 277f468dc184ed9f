// CLI error types and handling

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Command-line argument parsing and validation failures
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid or missing action
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Missing required argument
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// File system and terminal I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        CliError::ParseError(msg.into())
    }

    /// Create an invalid command error with context
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        CliError::InvalidCommand(msg.into())
    }
}
