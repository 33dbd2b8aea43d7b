//! Global Emulator Constants.
//!
//! This module defines system-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Default memory capacity and initial stack pointer.
//! 2. **Instruction Constants:** Word width and the bit layout of instruction fields.

/// Size of one machine word (and one instruction) in bytes.
pub const WORD_SIZE: u32 = 4;

/// Default memory capacity in bytes (8 KiB).
pub const DEFAULT_RAM_SIZE: usize = 8192;

/// Default initial value of the stack pointer register.
///
/// Points one past the end of the default memory image; the stack grows downward.
pub const DEFAULT_STACK_POINTER: u32 = 0x2000;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Bit position of the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for 6-bit fields (opcode, funct).
pub const SIX_BITS: u32 = 0x3F;

/// Bit mask for 5-bit fields (rs, rt, rd, shamt).
pub const FIVE_BITS: u32 = 0x1F;

/// Bit mask for the 16-bit immediate field.
pub const SIXTEEN_BITS: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field.
pub const TWENTYSIX_BITS: u32 = 0x03FF_FFFF;

/// Bit position of the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Bit position of the `shamt` field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;
