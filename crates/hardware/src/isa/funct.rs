//! R-type Function Codes.
//!
//! Defines the 6-bit funct values (bits 5-0) that select the operation of an
//! `OP_SPECIAL` instruction.

/// Shift Left Logical (SLL).
pub const SLL: u32 = 0x00;

/// Shift Right Arithmetic (SRA).
pub const SRA: u32 = 0x03;

/// Jump Register (JR).
pub const JR: u32 = 0x08;

/// System Call (SYSCALL).
pub const SYSCALL: u32 = 0x0C;

/// Add (ADD).
pub const ADD: u32 = 0x20;

/// Add Unsigned (ADDU); never traps.
pub const ADDU: u32 = 0x21;

/// Subtract (SUB).
pub const SUB: u32 = 0x22;

/// Bitwise AND.
pub const AND: u32 = 0x24;

/// Bitwise OR.
pub const OR: u32 = 0x25;

/// Bitwise NOR.
pub const NOR: u32 = 0x27;

/// Set on Less Than (SLT), signed compare.
pub const SLT: u32 = 0x2A;

/// Set on Less Than Unsigned (SLTU).
pub const SLTU: u32 = 0x2B;
