//! JSON file I/O for the book catalog.
//!
//! The file holds a single JSON array of book objects, written with
//! 4-space indentation.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, ShelfError};
use crate::model::Book;

/// Default catalog file name, resolved against the working directory.
pub const DEFAULT_FILE_NAME: &str = "my_books.json";

/// Load books from a JSON file.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot be
/// read, or `Json` if it is not an array of book objects.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShelfError::FileNotFound(path.to_path_buf())
        } else {
            ShelfError::Io(e)
        }
    })?;
    let books: Vec<Book> = serde_json::from_reader(BufReader::new(file))?;
    Ok(books)
}

/// Save books to a JSON file with atomic write.
///
/// Uses write-to-temp + rename, so a failure leaves the previous file
/// untouched.
///
/// # Errors
///
/// Returns `Write` if the temp file cannot be written or renamed.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");

    let result = write_pretty(&tmp_path, books).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| ShelfError::write(path, e))
    });

    if result.is_err() {
        // Best effort; the temp file may never have been created.
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_pretty(tmp_path: &Path, books: &[Book]) -> Result<()> {
    let file = fs::File::create(tmp_path).map_err(|e| ShelfError::write(tmp_path, e))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    books.serialize(&mut ser)?;

    writer
        .flush()
        .map_err(|e| ShelfError::write(tmp_path, e))?;
    Ok(())
}
