//! Search command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::{Book, LibraryStore, SearchField};

use crate::cli::console::Console;
use crate::error::Result;
use crate::format::{format_book_line, format_search_status, icons};

/// Execute the search command.
///
/// A field choice other than title/author matches nothing.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn execute<R: BufRead, W: Write>(
    store: &LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.line("Search by: ")?;
    console.line("1. Title")?;
    console.line("2. Author")?;
    let choice = console.prompt("Choose (1 or 2): ")?;
    let query = console.prompt("Enter your search: ")?;

    let matches: Vec<&Book> = match choice.parse::<SearchField>() {
        Ok(field) => {
            let hits = store.search(field, &query);
            tracing::debug!(%field, query = %query, hits = hits.len(), "Searched library");
            hits
        }
        Err(e) => {
            tracing::debug!(error = %e, "Search field not recognised");
            Vec::new()
        }
    };

    if matches.is_empty() {
        return console.line(format!("{} No results found.\n", icons::NO_RESULTS));
    }

    console.line(format!("\n{} Search Results:", icons::SEARCH))?;
    for (idx, book) in matches.iter().enumerate() {
        let line = format_book_line(book, format_search_status(book.read));
        console.line(format!("{}. {line}", idx + 1))?;
    }
    console.blank()
}
