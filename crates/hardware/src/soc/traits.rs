//! Console trait for syscall I/O.
//!
//! This module defines the `Console` trait through which the syscall services reach
//! the host. It provides:
//! 1. **Output:** Decimal integers (print-integer) and raw byte strings (print-string).
//! 2. **Input:** Blocking integer reads (read-integer).
//!
//! The machine never talks to stdin/stdout directly, so tests and embedders can drive it
//! from in-memory buffers.

use crate::common::ConsoleError;

/// Host console used by the syscall sub-handler.
pub trait Console {
    /// Writes `value` in decimal with no trailing newline, and flushes.
    fn print_int(&mut self, value: i32) -> Result<(), ConsoleError>;

    /// Writes raw bytes (the contents of a NUL-terminated string) and flushes.
    fn print_str(&mut self, bytes: &[u8]) -> Result<(), ConsoleError>;

    /// Blocks until one whitespace-delimited integer is available and returns it.
    fn read_int(&mut self) -> Result<i32, ConsoleError>;
}
