//! `bookshelf` (shelf) - Personal library catalog manager
//!
//! Interactive menu over a JSON file of books. Every change is written
//! straight back to disk.

use bookshelf::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
