//! Line-oriented console I/O for the interactive shell
//!
//! Wraps an input/output pair so prompts can be driven by a terminal or by
//! a test buffer. End of input is reported as `None` rather than an error.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::EnergyResult;

/// Prompting console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, text: impl Display) -> EnergyResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a trailing newline
    pub fn print(&mut self, text: impl Display) -> EnergyResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt and read one trimmed line, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// read, so stray input is rejected by the parser like any other typo.
    pub fn read_line(&mut self, prompt: &str) -> EnergyResult<Option<String>> {
        self.print(prompt)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            self.say("")?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Prompt until the answer parses, `None` at end of input
    pub fn ask<T, E, F>(&mut self, prompt: &str, parse: F) -> EnergyResult<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(format!("Invalid input: {}. Please try again.", e))?,
            }
        }
    }

    /// Like `ask`, but a blank answer is accepted as `Some(None)`
    pub fn ask_optional<T, E, F>(&mut self, prompt: &str, parse: F) -> EnergyResult<Option<Option<T>>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            if line.is_empty() {
                return Ok(Some(None));
            }

            match parse(&line) {
                Ok(value) => return Ok(Some(Some(value))),
                Err(e) => self.say(format!("Invalid input: {}. Please try again.", e))?,
            }
        }
    }

    /// Ask a yes/no question; anything but y/yes counts as no
    pub fn confirm(&mut self, prompt: &str) -> EnergyResult<bool> {
        let answer = self.read_line(prompt)?.unwrap_or_default().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
