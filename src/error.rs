//! Error types for the precis summarizer.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for precis operations.
#[derive(Error, Debug)]
pub enum PrecisError {
    /// A call argument is out of range (e.g. more summary sentences than the
    /// document has).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The document has nothing to summarize.
    #[error("Empty content: {0}")]
    EmptyContent(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Result type alias for precis operations.
pub type Result<T> = std::result::Result<T, PrecisError>;

impl From<serde_json::Error> for PrecisError {
    fn from(err: serde_json::Error) -> Self {
        PrecisError::Serialization(err.to_string())
    }
}
