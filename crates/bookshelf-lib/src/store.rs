//! In-memory book store backed by an ordered `Vec`.
//!
//! Every mutating call persists the whole sequence before returning. If the
//! write fails the in-memory change is rolled back, so memory and disk never
//! disagree after a call returns.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, ShelfError};
use crate::model::{Book, ReadingStats};
use crate::query::{BookUpdate, SearchField};
use crate::storage;

/// Personal library catalog.
///
/// Insertion order is display order. Titles are the lookup key but are not
/// unique; lookups resolve to the first case-insensitive match.
#[derive(Debug)]
pub struct LibraryStore {
    books: Vec<Book>,
    path: PathBuf,
}

impl LibraryStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an empty store that will persist to `path`.
    ///
    /// Nothing is read or written until [`load`](Self::load) or a mutation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            books: Vec::new(),
            path: path.into(),
        }
    }

    /// Open the catalog at `path`, starting empty if the file is missing or
    /// unreadable.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Replace the in-memory sequence with the file contents.
    ///
    /// A missing or malformed file yields an empty library.
    pub fn load(&mut self) {
        self.books = match storage::load(&self.path) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "Loaded library");
                books
            }
            Err(ShelfError::FileNotFound(_)) => {
                debug!(path = %self.path.display(), "No library file, starting empty");
                Vec::new()
            }
            Err(e) => {
                debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable library file, starting empty"
                );
                Vec::new()
            }
        };
    }

    /// Write the full sequence to the backing file.
    ///
    /// # Errors
    ///
    /// Returns `Write` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        storage::save(&self.path, &self.books)?;
        debug!(path = %self.path.display(), count = self.books.len(), "Saved library");
        Ok(())
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a book exactly as given and persist.
    ///
    /// # Errors
    ///
    /// Returns the save error; the book is not kept in that case.
    pub fn add(&mut self, book: Book) -> Result<()> {
        self.books.push(book);
        if let Err(e) = self.save() {
            self.books.pop();
            warn!(error = %e, "Add rolled back");
            return Err(e);
        }
        info!(count = self.books.len(), "Book added");
        Ok(())
    }

    /// Remove the first book whose title matches case-insensitively.
    ///
    /// Persists only when something was removed. Returns the removed book,
    /// or `None` if no title matched.
    ///
    /// # Errors
    ///
    /// Returns the save error; the book is restored in that case.
    pub fn remove(&mut self, title: &str) -> Result<Option<Book>> {
        let Some(idx) = self.position(title) else {
            debug!(title, "Remove: no match");
            return Ok(None);
        };

        let removed = self.books.remove(idx);
        if let Err(e) = self.save() {
            self.books.insert(idx, removed);
            warn!(error = %e, "Remove rolled back");
            return Err(e);
        }
        info!(title = %removed.title, "Book removed");
        Ok(Some(removed))
    }

    /// Apply `update` to the first book whose title matches
    /// case-insensitively.
    ///
    /// The file is rewritten whenever a match is found, even if the update
    /// changes nothing. Returns the updated book, or `None` if no title
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns the save error; the book's previous values are restored in
    /// that case.
    pub fn edit(&mut self, title: &str, update: &BookUpdate) -> Result<Option<Book>> {
        let Some(idx) = self.position(title) else {
            debug!(title, "Edit: no match");
            return Ok(None);
        };

        let previous = self.books[idx].clone();
        update.apply(&mut self.books[idx]);

        if let Err(e) = self.save() {
            self.books[idx] = previous;
            warn!(error = %e, "Edit rolled back");
            return Err(e);
        }

        let updated = self.books[idx].clone();
        info!(title = %updated.title, changed = updated != previous, "Book updated");
        Ok(Some(updated))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Case-insensitive substring search on one field, in library order.
    #[must_use]
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        let query_lower = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| field.value(book).to_lowercase().contains(&query_lower))
            .collect()
    }

    /// First book whose title matches case-insensitively.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title_matches(title))
    }

    /// All books in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn stats(&self) -> ReadingStats {
        ReadingStats {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.read).count(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title_matches(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dune() -> Book {
        Book::new("Dune", "Herbert", "1965", "SciFi", false)
    }

    fn temp_store() -> (tempfile::TempDir, LibraryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LibraryStore::open(dir.path().join("my_books.json"));
        (dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my_books.json");
        fs::write(&path, "[{\"title\": ").unwrap();

        let store = LibraryStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        let odd = Book::new("  Odd ", "", "someday", "", true);
        store.add(odd.clone()).unwrap();

        assert_eq!(store.list(), &[dune(), odd.clone()]);
        assert_eq!(storage::load(store.path()).unwrap(), vec![dune(), odd]);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        store.add(dune()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_roundtrip_save_load() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Austen", "1815", "Classic", true))
            .unwrap();

        let reloaded = LibraryStore::open(store.path());
        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn test_remove_first_match_only() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        store
            .add(Book::new("DUNE", "Other", "2000", "Parody", true))
            .unwrap();

        let removed = store.remove("dune").unwrap().unwrap();
        assert_eq!(removed, dune());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "DUNE");

        let on_disk = storage::load(store.path()).unwrap();
        assert_eq!(on_disk, store.list());
    }

    #[test]
    fn test_remove_not_found_does_not_write() {
        let (_dir, mut store) = temp_store();
        assert!(store.remove("Nothing").unwrap().is_none());
        assert!(!store.path().exists());

        store.add(dune()).unwrap();
        fs::write(store.path(), "sentinel").unwrap();
        assert!(store.remove("Dun").unwrap().is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "sentinel");
    }

    #[test]
    fn test_search_title_substring() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        store
            .add(Book::new("Dune Messiah", "Herbert", "1969", "SciFi", false))
            .unwrap();
        store
            .add(Book::new("Emma", "Austen", "1815", "Classic", true))
            .unwrap();

        let hits = store.search(SearchField::Title, "UNE");
        let titles: Vec<&str> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn test_search_author_and_empty_query() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Austen", "1815", "Classic", true))
            .unwrap();

        assert_eq!(store.search(SearchField::Author, "aus").len(), 1);
        assert!(store.search(SearchField::Author, "dune").is_empty());
        assert_eq!(store.search(SearchField::Title, "").len(), 2);
    }

    #[test]
    fn test_search_is_idempotent() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        let first: Vec<Book> = store
            .search(SearchField::Title, "d")
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<Book> = store
            .search(SearchField::Title, "d")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_edit_empty_update_still_writes() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        fs::write(store.path(), "sentinel").unwrap();

        let updated = store.edit("DUNE", &BookUpdate::default()).unwrap().unwrap();
        assert_eq!(updated, dune());
        assert_eq!(storage::load(store.path()).unwrap(), vec![dune()]);
    }

    #[test]
    fn test_edit_partial_update() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();

        let update = BookUpdate::from_answers("", "Frank Herbert", "", "", "YES");
        let updated = store.edit("dune", &update).unwrap().unwrap();
        assert_eq!(
            updated,
            Book::new("Dune", "Frank Herbert", "1965", "SciFi", true)
        );
        assert_eq!(store.find("dune"), Some(&updated));
    }

    #[test]
    fn test_edit_not_found() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        let update = BookUpdate {
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(store.edit("Emma", &update).unwrap().is_none());
        assert_eq!(store.list(), &[dune()]);
    }

    #[test]
    fn test_stats() {
        let (_dir, mut store) = temp_store();
        assert_eq!(store.stats(), ReadingStats { total: 0, read: 0 });

        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Austen", "1815", "Classic", true))
            .unwrap();
        let stats = store.stats();
        assert_eq!(stats, ReadingStats { total: 2, read: 1 });
        assert_eq!(format!("{:.1}", stats.progress()), "50.0");
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LibraryStore::new(dir.path().join("gone").join("my_books.json"));

        assert!(store.add(dune()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_restores_edit_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("lib");
        fs::create_dir(&sub).unwrap();
        let mut store = LibraryStore::new(sub.join("my_books.json"));
        store.add(dune()).unwrap();

        fs::remove_dir_all(&sub).unwrap();

        let update = BookUpdate {
            read: Some(true),
            ..Default::default()
        };
        assert!(store.edit("dune", &update).is_err());
        assert_eq!(store.list(), &[dune()]);

        assert!(store.remove("dune").is_err());
        assert_eq!(store.list(), &[dune()]);
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        let saved = fs::read(store.path()).unwrap();

        // A directory squatting on the temp name makes every write fail.
        fs::create_dir(store.path().with_extension("json.tmp")).unwrap();

        let emma = Book::new("Emma", "Austen", "1815", "Classic", true);
        assert!(matches!(store.add(emma), Err(ShelfError::Write { .. })));
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read(store.path()).unwrap(), saved);

        assert!(store.remove("dune").is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read(store.path()).unwrap(), saved);

        assert_eq!(LibraryStore::open(store.path()).list(), &[dune()]);
    }

    #[test]
    fn test_dune_scenario() {
        let (_dir, mut store) = temp_store();
        store.add(dune()).unwrap();
        assert_eq!(store.list(), &[dune()]);

        let update = BookUpdate::from_answers("", "", "", "", "yes");
        store.edit("Dune", &update).unwrap().unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.read, 1);
        assert_eq!(format!("{:.1}", stats.progress()), "100.0");
    }
}
