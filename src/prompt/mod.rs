// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive console prompting.
//!
//! ```text
//! Prompt<R: BufRead, W: Write>
//!  ask_yes_no("...?", default)   "[Y/n]" / "[y/N]", first-letter match
//!  ask_until(msg, err, pred)     reprompt until predicate accepts
//!  ask_nonempty(msg)             reprompt until non-empty
//!  say(line)                     plain status line
//! ```
//!
//! All user I/O in the crate goes through this type. Production code uses
//! [`Prompt::console`]; tests construct a `Prompt` over a `Cursor` script and
//! a `Vec<u8>` sink, so the otherwise unbounded reprompt loops are bounded by
//! the injected input stream. Exhausting that stream yields
//! [`KspdevError::Bailed`] instead of spinning.
//!
//! With `assume_default` set (`setup --yes`), every yes/no question resolves
//! to its default without reading input.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::{KspdevError, KspdevResult, bail_out};

/// Interactive prompter over an injected input/output pair.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    assume_default: bool,
}

impl Prompt<BufReader<Stdin>, Stdout> {
    /// Creates a prompter over the real console.
    #[must_use]
    pub fn console(assume_default: bool) -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
            assume_default,
        }
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompter over arbitrary streams.
    pub const fn new(input: R, output: W, assume_default: bool) -> Self {
        Self {
            input,
            output,
            assume_default,
        }
    }

    /// Consumes the prompter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a plain status line to the console.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written to.
    pub fn say(&mut self, line: impl AsRef<str>) -> KspdevResult<()> {
        writeln!(self.output, "{}", line.as_ref()).map_err(KspdevError::from)?;
        self.output.flush().map_err(KspdevError::from)
    }

    /// Asks a yes/no question.
    ///
    /// The answer's first letter is matched case-insensitively against
    /// "yes"/"no"; empty input resolves to `default`; anything else is
    /// rejected and the question repeats.
    ///
    /// # Errors
    ///
    /// Returns [`KspdevError::Bailed`] if the input stream ends before a
    /// valid answer is read, or an I/O error from the underlying streams.
    pub fn ask_yes_no(&mut self, message: &str, default: bool) -> KspdevResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };

        if self.assume_default {
            self.say(format!("{message} {hint}: (assumed)"))?;
            return Ok(default);
        }

        loop {
            write!(self.output, "{message} {hint}: ").map_err(KspdevError::from)?;
            self.output.flush().map_err(KspdevError::from)?;

            let line = self.read_line()?;
            let answer = line.trim();

            if answer.is_empty() {
                return Ok(default);
            }
            match answer.chars().next() {
                Some(c) if c.eq_ignore_ascii_case(&'y') => return Ok(true),
                Some(c) if c.eq_ignore_ascii_case(&'n') => return Ok(false),
                _ => self.say("Invalid response.")?,
            }
        }
    }

    /// Asks for free-text input until `accept` returns true for the trimmed
    /// line. `invalid_message` is shown before each retry.
    ///
    /// # Errors
    ///
    /// Returns [`KspdevError::Bailed`] if the input stream ends before an
    /// accepted answer is read, or an I/O error from the underlying streams.
    pub fn ask_until<F>(
        &mut self,
        message: &str,
        invalid_message: &str,
        accept: F,
    ) -> KspdevResult<String>
    where
        F: Fn(&str) -> bool,
    {
        loop {
            write!(self.output, "{message}").map_err(KspdevError::from)?;
            self.output.flush().map_err(KspdevError::from)?;

            let line = self.read_line()?;
            let answer = line.trim();
            if accept(answer) {
                return Ok(answer.to_string());
            }
            self.say(invalid_message)?;
        }
    }

    /// Asks for free-text input until a non-empty line is read.
    ///
    /// # Errors
    ///
    /// Same as [`Prompt::ask_until`].
    pub fn ask_nonempty(&mut self, message: &str) -> KspdevResult<String> {
        self.ask_until(message, "Invalid answer.", |s| !s.is_empty())
    }

    /// Reads one line, treating end-of-stream as a fatal bail.
    fn read_line(&mut self) -> KspdevResult<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(KspdevError::from)?;
        if n == 0 {
            return Err(bail_out("input stream closed while waiting for an answer"));
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests;
