//! Add command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::query::parse_yes_no;
use bookshelf_lib::{Book, LibraryStore};

use super::report_save_error;
use crate::cli::console::Console;
use crate::error::Result;
use crate::format::icons;

/// Execute the add command.
///
/// Fields are stored exactly as typed. The book counts as read only when
/// the answer is `yes`.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn execute<R: BufRead, W: Write>(
    store: &mut LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let title = console.prompt("Book title: ")?;
    let author = console.prompt("Author name: ")?;
    let year = console.prompt("Year published: ")?;
    let genre = console.prompt("Genre of the book: ")?;
    let read = console.prompt("Have you read it? (yes/no): ")?;

    let book = Book::new(title, author, year, genre, parse_yes_no(&read) == Some(true));

    match store.add(book) {
        Ok(()) => console.line(format!("{} Book added!\n", icons::DONE)),
        Err(e) => report_save_error(console, &e),
    }
}
