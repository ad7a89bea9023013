//! Search and update types for catalog operations.

use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;
use crate::model::Book;

/// Field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }

    /// Borrow the value of this field from a book.
    #[must_use]
    pub fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(Self::Title),
            "2" | "author" => Ok(Self::Author),
            other => Err(ShelfError::UnknownField(other.to_string())),
        }
    }
}

/// Fields to replace on a book. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

impl BookUpdate {
    /// Build an update from raw prompt answers.
    ///
    /// Empty text answers keep the current value. The read answer only
    /// counts when it is `yes` or `no` (case and surrounding whitespace
    /// ignored).
    #[must_use]
    pub fn from_answers(title: &str, author: &str, year: &str, genre: &str, read: &str) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            year: non_empty(year),
            genre: non_empty(genre),
            read: parse_yes_no(read),
        }
    }

    /// Apply the update in place.
    pub fn apply(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title.clone_from(title);
        }
        if let Some(ref author) = self.author {
            book.author.clone_from(author);
        }
        if let Some(ref year) = self.year {
            book.year.clone_from(year);
        }
        if let Some(ref genre) = self.genre {
            book.genre.clone_from(genre);
        }
        if let Some(read) = self.read {
            book.read = read;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse an explicit `yes`/`no` answer.
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
