//! Delete command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::LibraryStore;

use super::report_save_error;
use crate::cli::console::Console;
use crate::error::Result;
use crate::format::icons;

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn execute<R: BufRead, W: Write>(
    store: &mut LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let title = console.prompt("Enter the title of the book to delete: ")?;

    match store.remove(&title) {
        Ok(Some(_)) => console.line(format!("{} Book deleted successfully.\n", icons::DELETED)),
        Ok(None) => console.line(format!("{} Book not found.\n", icons::NOT_FOUND)),
        Err(e) => report_save_error(console, &e),
    }
}
