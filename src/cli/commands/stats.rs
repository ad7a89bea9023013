//! Stats command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::LibraryStore;

use crate::cli::console::Console;
use crate::error::Result;
use crate::format::{format_progress, icons};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the console cannot be written.
pub fn execute<R: BufRead, W: Write>(
    store: &LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let stats = store.stats();
    console.line(format!("\n{} Total books: {}", icons::TOTAL, stats.total))?;
    console.line(format!("{} Completed: {}", icons::DONE, stats.read))?;
    console.line(format!("{} Progress: {}\n", icons::PROGRESS, format_progress(&stats)))
}
