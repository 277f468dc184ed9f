use std::io;

use thiserror::Error;

/// Result type for executor operations
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;

/// Errors that can occur while validating, decoding, or executing a command
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Executor and shell types cannot be combined
    #[error("Compatibility error: {0}")]
    Compatibility(String),

    /// Base64 input is malformed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Child process failed to start or exited non-zero
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ExecutorError {
    /// Create a new compatibility error
    pub fn compatibility(reason: impl Into<String>) -> Self {
        Self::Compatibility(reason.into())
    }

    /// Create a new decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }

    /// Create a new execution error
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution(reason.into())
    }
}
