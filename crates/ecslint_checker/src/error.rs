//! Processor error types.

use thiserror::Error;

/// Errors that can occur while processing a file.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// File could not be read.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessorError {
    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
