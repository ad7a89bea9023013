//! Logging setup for `shelf`.
//!
//! Console logs go to stderr so they never interleave with menu prompts on
//! stdout. The default level is `error`, which keeps an interactive session
//! clean.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{CliError, Result};

/// Map `-v`/`-q` flags to a maximum level.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// With `log_file`, events are appended to that file as JSON lines instead
/// of going to stderr.
///
/// # Errors
///
/// Returns `Io` if the log file cannot be opened, or `Logging` if a
/// subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(level_for(verbose, quiet).to_string());

    let installed = if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
    };

    installed.map_err(|e| CliError::Logging(e.to_string()))
}
