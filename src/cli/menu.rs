//! Interactive menu loop.
//!
//! One state, "awaiting choice": every answer either dispatches a command
//! and comes back here, or ends the loop (option 7 or end of input).

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use bookshelf_lib::LibraryStore;
use tracing::debug;

use crate::cli::commands;
use crate::cli::console::Console;
use crate::error::{CliError, Result};
use crate::format::icons;

/// Menu options, numbered 1-7 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Search,
    Update,
    List,
    Stats,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Delete,
        Self::Search,
        Self::Update,
        Self::List,
        Self::Stats,
        Self::Exit,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Delete => 2,
            Self::Search => 3,
            Self::Update => 4,
            Self::List => 5,
            Self::Stats => 6,
            Self::Exit => 7,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add book",
            Self::Delete => "Delete book",
            Self::Search => "Search books",
            Self::Update => "Update book",
            Self::List => "Show all books",
            Self::Stats => "View reading stats",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| trimmed == choice.number().to_string())
            .ok_or_else(|| CliError::InvalidChoice(s.to_string()))
    }
}

/// The menu loop, borrowing the store for its whole run.
pub struct Menu<'a, R, W> {
    store: &'a mut LibraryStore,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut LibraryStore, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    /// Run until the exit option is chosen or input runs out.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the console fails. Store write failures are reported
    /// on screen and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_banner()?;
            let answer = match self.console.prompt("Choose an option (1-7): ") {
                Ok(answer) => answer,
                Err(CliError::EndOfInput) => {
                    debug!("Input closed, leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    debug!(error = %e, "Rejected menu input");
                    self.console
                        .line(format!("{} Invalid choice. Please try again.\n", icons::ERROR))?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                self.console
                    .line(format!("{} Goodbye! Your books are saved.", icons::GOODBYE))?;
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(CliError::EndOfInput) => {
                    debug!("Input closed mid-command, leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!(choice = choice.label(), "Dispatching");
        match choice {
            MenuChoice::Add => commands::add::execute(self.store, &mut self.console),
            MenuChoice::Delete => commands::delete::execute(self.store, &mut self.console),
            MenuChoice::Search => commands::search::execute(self.store, &mut self.console),
            MenuChoice::Update => commands::update::execute(self.store, &mut self.console),
            MenuChoice::List => commands::list::execute(self.store, &mut self.console),
            MenuChoice::Stats => commands::stats::execute(self.store, &mut self.console),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn render_banner(&mut self) -> Result<()> {
        self.console
            .line(format!("=== {} Personal Library Manager ===", icons::BANNER))?;
        for choice in MenuChoice::ALL {
            self.console.line(choice)?;
        }
        Ok(())
    }
}
