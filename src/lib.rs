//! `bookshelf` - Personal library catalog manager
//!
//! This crate provides the console front end for the `shelf` binary. The
//! catalog itself lives in [`bookshelf_lib`].
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing, the interactive menu and its commands
//! - [`config`] - Catalog file location
//! - [`error`] - Console error types
//! - [`format`] - Text rendering of books and stats
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{CliError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if startup fails or the console breaks mid-session.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
