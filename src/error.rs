//! Error types for the wikisync library.

use std::io;
use thiserror::Error;

/// Result type alias for wikisync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, converting, or syncing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source document is structurally invalid.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The requested output format is not registered.
    #[error("Unknown format: '{0}'")]
    UnknownFormat(String),

    /// Error reading or writing persisted properties.
    #[error("Property store error: {0}")]
    Store(String),
}
