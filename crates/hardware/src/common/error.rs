//! Error and Trap definitions.
//!
//! This module defines the error handling model of the emulator. It provides:
//! 1. **Load Errors:** Failures while reading and placing a program image.
//! 2. **Anomalies:** Recoverable decode problems (unknown opcode, funct, or syscall).
//! 3. **Traps:** Fatal runtime faults that halt the machine.
//! 4. **Console Errors:** Failures of the host console behind the syscall services.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Errors raised while loading a program image, before execution begins.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("could not read program file '{}': {source}", .path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A token is not a valid unsigned 32-bit hexadecimal number.
    ///
    /// `index` is the 1-based position of the token in the input.
    #[error("token {index} ('{token}') is not a 32-bit hexadecimal word")]
    InvalidToken {
        /// 1-based token position.
        index: usize,
        /// The offending token text.
        token: String,
    },

    /// The program does not fit into the memory image.
    #[error("program of {words} words does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Recoverable decode anomalies.
///
/// The reference machine ignores these silently. Here they are surfaced to the caller,
/// logged and counted by default, and promoted to [`Trap::Anomaly`] in strict mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Anomaly {
    /// A register-type instruction carried an unrecognized funct field.
    #[error("unrecognized R-type funct {funct:#04x} in {raw:#010x}")]
    UnknownFunct {
        /// The funct field (bits 5-0).
        funct: u32,
        /// The raw instruction word.
        raw: u32,
    },

    /// An immediate-type or jump-type handler received an opcode it does not implement.
    #[error("unrecognized opcode {opcode:#04x} in {raw:#010x}")]
    UnknownOpcode {
        /// The opcode field (bits 31-26).
        opcode: u32,
        /// The raw instruction word.
        raw: u32,
    },

    /// A syscall was issued with an unrecognized service number in `$v0`.
    #[error("unrecognized syscall service {code}")]
    UnknownSyscall {
        /// Value of `$v0` at the time of the syscall.
        code: i32,
    },
}

/// Errors reported by a [`Console`](crate::soc::Console) implementation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the host stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Input was exhausted while the program waited for an integer.
    #[error("end of input while reading an integer")]
    EndOfInput,

    /// The next input token is not a 32-bit signed integer.
    #[error("invalid integer input '{0}'")]
    InvalidInteger(String),
}

/// Fatal runtime faults.
///
/// Any trap halts the fetch-execute loop. Traps are raised before the faulting
/// instruction modifies registers or memory; only the program counter has already
/// advanced past the faulting word.
#[derive(Debug, Error)]
pub enum Trap {
    /// A fetch, load, or store touched bytes outside the memory image.
    #[error(
        "memory fault: {access} of {size} bytes at address {addr} (memory is {capacity} bytes)"
    )]
    MemoryFault {
        /// Kind of access that faulted.
        access: AccessType,
        /// Effective address, computed without 32-bit wraparound.
        addr: i64,
        /// Width of the access in bytes.
        size: u32,
        /// Capacity of the memory image in bytes.
        capacity: usize,
    },

    /// A trapping add, sub, or addi overflowed (only when overflow trapping is enabled).
    #[error("integer overflow")]
    IntegerOverflow,

    /// A decode anomaly encountered in strict mode.
    #[error("strict mode: {0}")]
    Anomaly(Anomaly),

    /// The configured instruction budget was exhausted before the program halted.
    #[error("instruction limit of {0} exceeded")]
    InstructionLimit(u64),

    /// The console behind a syscall failed.
    #[error("console: {0}")]
    Console(#[from] ConsoleError),
}
