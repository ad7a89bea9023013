//! Error types for `bookshelf-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for catalog operations.
#[derive(Error, Debug)]
pub enum ShelfError {
    // === Storage Errors ===
    /// Writing the library file failed; the previous file is left in place.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === Query Errors ===
    /// Search field other than title or author.
    #[error("Unknown search field: {0}")]
    UnknownField(String),

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShelfError {
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type using `ShelfError`.
pub type Result<T> = std::result::Result<T, ShelfError>;
