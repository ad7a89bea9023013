//! Text formatting functions for `shelf`.
//!
//! Provides the console rendering of books and reading stats:
//! - Message icons (✅ 🗑️ ⚠️ 🔎 📚 ...)
//! - Read status labels
//! - Book line formatting

use bookshelf_lib::{Book, ReadingStats};

/// Message icon characters.
pub mod icons {
    /// Menu banner.
    pub const BANNER: &str = "📘";
    /// Success / completed count.
    pub const DONE: &str = "✅";
    /// Book removed.
    pub const DELETED: &str = "🗑️";
    /// Lookup missed.
    pub const NOT_FOUND: &str = "⚠️";
    /// Search results header.
    pub const SEARCH: &str = "🔎";
    /// Search came back empty.
    pub const NO_RESULTS: &str = "😕";
    /// Book updated.
    pub const EDITED: &str = "✏️";
    /// Empty library.
    pub const EMPTY: &str = "📭";
    /// Book list header.
    pub const LIST: &str = "📚";
    /// Total count.
    pub const TOTAL: &str = "📊";
    /// Progress percentage.
    pub const PROGRESS: &str = "📈";
    /// Farewell.
    pub const GOODBYE: &str = "👋";
    /// Invalid input or failed operation.
    pub const ERROR: &str = "❌";
}

/// Status label used in the full book list.
#[must_use]
pub const fn format_read_status(read: bool) -> &'static str {
    if read { "Read" } else { "Unread" }
}

/// Status label used in search results.
#[must_use]
pub const fn format_search_status(read: bool) -> &'static str {
    if read { "Already Read" } else { "Unread" }
}

/// Format a single-line book summary.
///
/// Format: `{title} by {author} ({year}) - {genre} - {status}`
#[must_use]
pub fn format_book_line(book: &Book, status: &str) -> String {
    format!(
        "{} by {} ({}) - {} - {}",
        book.title, book.author, book.year, book.genre, status
    )
}

/// Format reading progress with one decimal place, e.g. `66.7%`.
#[must_use]
pub fn format_progress(stats: &ReadingStats) -> String {
    format!("{:.1}%", stats.progress())
}
