//! Major Opcodes.
//!
//! Defines the 6-bit opcode values (bits 31-26) recognized by the decoder.

/// Register-type instructions; the operation is selected by the funct field.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Set on Less Than Immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// AND Immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;

/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;

/// Load Halfword Unsigned (LHU).
pub const OP_LHU: u32 = 0x25;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;
