//! Configuration management for `shelf`.
//!
//! There is one setting, the catalog file path. It defaults to
//! `my_books.json` in the working directory and can be overridden on the
//! command line. No environment variables or config files are read.

use std::path::PathBuf;

use bookshelf_lib::storage::DEFAULT_FILE_NAME;
use bookshelf_lib::{Result, ShelfError};

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data: Option<PathBuf>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

impl Config {
    /// Merge CLI overrides over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the data path is empty or names a directory.
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = &cli.data {
            config.data_path.clone_from(path);
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ShelfError::Config("data path cannot be empty".to_string()));
        }
        if self.data_path.is_dir() {
            return Err(ShelfError::Config(format!(
                "data path {} is a directory",
                self.data_path.display()
            )));
        }
        Ok(())
    }
}
