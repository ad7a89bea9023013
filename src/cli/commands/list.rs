//! List command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::LibraryStore;

use crate::cli::console::Console;
use crate::error::Result;
use crate::format::{format_book_line, format_read_status, icons};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the console cannot be written.
pub fn execute<R: BufRead, W: Write>(
    store: &LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let books = store.list();
    if books.is_empty() {
        return console.line(format!("{} No books in your library yet.\n", icons::EMPTY));
    }

    console.line(format!("\n{} Your Book List:", icons::LIST))?;
    for (idx, book) in books.iter().enumerate() {
        let line = format_book_line(book, format_read_status(book.read));
        console.line(format!("{}. {line}", idx + 1))?;
    }
    console.blank()
}
