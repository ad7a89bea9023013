//! Output formatting for `shelf`.
//!
//! Plain text with emoji-decorated messages; there is no machine-readable
//! output mode.

mod text;

pub use text::{
    format_book_line, format_progress, format_read_status, format_search_status, icons,
};
