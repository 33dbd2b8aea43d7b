//! Stream-backed console.
//!
//! Implements [`Console`] over any buffered reader and writer. The host console wires
//! it to stdin and stdout; tests use byte slices and `Vec<u8>`.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::common::ConsoleError;
use crate::soc::traits::Console;

/// Console reading integers from `R` and writing output to `W`.
///
/// Input is consumed a line at a time and split on whitespace, so several integers on
/// one line satisfy several read-integer syscalls.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

/// Console attached to the process's stdin and stdout.
pub type HostConsole = StreamConsole<StdinLock<'static>, Stdout>;

impl HostConsole {
    /// Creates a console over the locked process stdin and stdout.
    pub fn host() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the next whitespace-delimited token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn print_int(&mut self, value: i32) -> Result<(), ConsoleError> {
        write!(self.output, "{value}")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_str(&mut self, bytes: &[u8]) -> Result<(), ConsoleError> {
        self.output.write_all(bytes)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_int(&mut self) -> Result<i32, ConsoleError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| ConsoleError::InvalidInteger(token))
    }
}
