//! Command-line interface for `shelf`.
//!
//! There are no subcommands: the binary always runs the interactive menu.
//! Flags only tune logging and where the catalog file lives.

pub mod commands;
pub mod console;
pub mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bookshelf_lib::LibraryStore;

use crate::cli::console::Console;
use crate::cli::menu::Menu;
use crate::config::{CliOverrides, Config};
use crate::logging;

/// `shelf` - Personal library manager.
#[derive(Parser, Debug, Default)]
#[command(name = "shelf")]
#[command(
    author,
    version,
    about = "Personal library manager (interactive menu, JSON file storage)",
    long_about = None,
    after_help = "Books are saved to my_books.json in the working directory after every change."
)]
pub struct Cli {
    /// Verbose logging to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no logging at all)
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Catalog file (default: my_books.json)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data: self.data.clone(),
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if logging or configuration cannot be set up, or if the
/// console fails mid-session.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let config = Config::resolve(&cli.overrides())?;
    let mut store = LibraryStore::open(&config.data_path);
    info!(path = %store.path().display(), books = store.len(), "Library opened");

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    Menu::new(&mut store, console)
        .run()
        .context("Interactive session failed")?;

    Ok(())
}
