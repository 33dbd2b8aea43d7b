//! Memory Access Types.
//!
//! This module defines the classification of memory accesses, used when reporting
//! which kind of access left the memory image.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when reporting memory faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the fetch-execute loop reads the word at the program counter.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions and when the print-string syscall reads its argument.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
