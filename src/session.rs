use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    Evaluator,
    interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, constant_names},
    util::format::format_value,
};

/// A line-oriented calculator session.
///
/// Owns one [`Evaluator`], so `last` carries from line to line, and writes
/// results and errors to separate sinks. The command-line front end runs one
/// session per invocation; tests drive it with in-memory buffers.
#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
    precision: Option<usize>,
}

impl Session {
    /// Creates a session printing at most `precision` decimals.
    #[must_use]
    pub const fn new(precision: Option<usize>) -> Self {
        Self { evaluator: Evaluator::new(),
               precision }
    }

    /// The evaluator behind this session.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Evaluates one expression and prints the result to `out` or the error
    /// to `err`.
    ///
    /// Returns `Ok(true)` if the evaluation succeeded.
    pub fn evaluate_and_print(&mut self,
                              source: &str,
                              out: &mut impl Write,
                              err: &mut impl Write)
                              -> io::Result<bool> {
        match self.evaluator.evaluate(source) {
            Ok(value) => {
                debug!("{source:?} => {value}");
                writeln!(out, "{}", format_value(value, self.precision))?;
                Ok(true)
            },
            Err(e) => {
                debug!("{source:?} failed with {}", e.kind());
                writeln!(err, "{e}")?;
                Ok(false)
            },
        }
    }

    /// Evaluates every line of `input` in order.
    ///
    /// Blank lines are skipped without an error. With `prompt`, `> ` is
    /// written to `out` before each line is read.
    ///
    /// Returns `Ok(true)` if every evaluated line succeeded.
    pub fn run(&mut self,
               input: impl BufRead,
               out: &mut impl Write,
               err: &mut impl Write,
               prompt: bool)
               -> io::Result<bool> {
        let mut lines = input.lines();
        let mut all_succeeded = true;

        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            all_succeeded &= self.evaluate_and_print(&line, out, err)?;
        }

        Ok(all_succeeded)
    }
}

/// Writes the names of every constant and function, one category per line.
pub fn write_identifiers(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "constants: {}", constant_names().collect::<Vec<_>>().join(" "))?;
    writeln!(out, "functions: {}", BUILTIN_FUNCTIONS.join(" "))
}
