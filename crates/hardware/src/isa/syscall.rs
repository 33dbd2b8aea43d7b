//! Syscall Service Numbers.
//!
//! Values placed in `$v0` before a `syscall` instruction.

/// Print `$a0` as a decimal integer.
pub const PRINT_INT: i32 = 1;

/// Print the NUL-terminated string whose address is in `$a0`.
pub const PRINT_STRING: i32 = 4;

/// Read an integer from the console into `$v0`.
pub const READ_INT: i32 = 5;

/// Terminate the program.
pub const EXIT: i32 = 10;
