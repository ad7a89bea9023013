//! Line-oriented prompt/print wrapper over any reader and writer.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{CliError, Result};

/// Prompting console.
///
/// The binary wraps stdin/stdout; tests wrap a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one answer.
    ///
    /// The line terminator is stripped; everything else is returned as typed.
    ///
    /// # Errors
    ///
    /// Returns `EndOfInput` when the input is exhausted, or `Io` on a
    /// read/write failure.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output cannot be written.
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print an empty line.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output cannot be written.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
