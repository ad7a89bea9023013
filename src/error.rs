//! Error types for the `shelf` console front end.
//!
//! Store failures are typed in [`bookshelf_lib::ShelfError`]; this enum covers
//! what can go wrong while talking to the terminal.

use std::io;
use thiserror::Error;

/// Errors raised by the interactive console.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input stream closed while waiting for an answer.
    #[error("end of input")]
    EndOfInput,

    /// Menu input that is not one of the listed options.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
