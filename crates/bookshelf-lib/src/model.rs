//! Core data types for bookshelf-lib.
//!
//! The serde layout of [`Book`] is the on-disk format: a JSON object with
//! `title`, `author`, `year`, `genre` and `read`.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `year` is free text; it is never validated or parsed as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl Book {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive exact comparison against this book's title.
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Aggregate reading progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingStats {
    pub total: usize,
    pub read: usize,
}

impl ReadingStats {
    /// Percentage of books marked read, `0.0` for an empty library.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.read as f64 / self.total as f64 * 100.0
        }
    }
}
