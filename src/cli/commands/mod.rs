//! One module per menu option.
//!
//! Each `execute` prompts for its inputs, calls the store and renders the
//! outcome. A failed save is reported and the menu carries on; only console
//! errors propagate.

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

use std::io::{BufRead, Write};

use bookshelf_lib::ShelfError;

use crate::cli::console::Console;
use crate::error::Result;
use crate::format::icons;

/// Tell the user a change was not saved.
fn report_save_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &ShelfError,
) -> Result<()> {
    tracing::debug!(error = %err, "Save failed, change discarded");
    console.line(format!("{} Could not save library: {err}\n", icons::ERROR))
}
