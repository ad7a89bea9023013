//! `bookshelf-lib` — In-process personal book catalog.
//!
//! Books live in memory as an ordered sequence and are persisted to a
//! single JSON file after every mutation.
//!
//! # Quick Start
//!
//! ```no_run
//! use bookshelf_lib::{Book, BookUpdate, LibraryStore, SearchField};
//!
//! // Load existing file (or start empty)
//! let mut store = LibraryStore::open("my_books.json");
//!
//! // Add
//! store.add(Book::new("Dune", "Frank Herbert", "1965", "SciFi", false)).unwrap();
//!
//! // Query
//! let hits = store.search(SearchField::Author, "herbert");
//!
//! // Update
//! store.edit("dune", &BookUpdate { read: Some(true), ..Default::default() }).unwrap();
//!
//! // Summarize
//! let stats = store.stats();
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

pub use error::{Result, ShelfError};
pub use model::{Book, ReadingStats};
pub use query::{BookUpdate, SearchField};
pub use store::LibraryStore;
