use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipmemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Label or content was empty after trimming.
    #[error("Please enter both a label and content")]
    Validation,

    #[error("Index {index} is out of range for a list of {len} snippets")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Stored snippet data is corrupt: {0}")]
    Corrupt(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ClipmemoError>;
