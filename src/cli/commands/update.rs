//! Update command implementation.

use std::io::{BufRead, Write};

use bookshelf_lib::{BookUpdate, LibraryStore};

use super::report_save_error;
use crate::cli::console::Console;
use crate::error::Result;
use crate::format::icons;

/// Execute the update command.
///
/// The replacement prompts show the current values; an empty answer keeps
/// the field, and the read flag only changes on `yes` or `no`.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn execute<R: BufRead, W: Write>(
    store: &mut LibraryStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let title = console.prompt("Enter the book title to update: ")?;

    let Some(current) = store.find(&title).cloned() else {
        return console.line(format!("{} Book not found.\n", icons::NOT_FOUND));
    };

    console.line("Leave input empty to keep current value.")?;
    let new_title = console.prompt(&format!("New title ({}): ", current.title))?;
    let new_author = console.prompt(&format!("New author ({}): ", current.author))?;
    let new_year = console.prompt(&format!("New year ({}): ", current.year))?;
    let new_genre = console.prompt(&format!("New genre ({}): ", current.genre))?;
    let new_read = console.prompt("Have you read it? (yes/no): ")?;

    let update =
        BookUpdate::from_answers(&new_title, &new_author, &new_year, &new_genre, &new_read);

    match store.edit(&title, &update) {
        Ok(Some(_)) => console.line(format!("{} Book info updated!\n", icons::EDITED)),
        Ok(None) => console.line(format!("{} Book not found.\n", icons::NOT_FOUND)),
        Err(e) => report_save_error(console, &e),
    }
}
