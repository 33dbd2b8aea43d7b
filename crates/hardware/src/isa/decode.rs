//! Instruction Decoder.
//!
//! This module splits a 32-bit instruction word into its fields and selects the
//! instruction format that will execute it. Format selection looks only at the
//! opcode:
//! - `0x00` is register-type,
//! - `0x02` and `0x03` are jump-type,
//! - every other opcode is immediate-type, including unrecognized ones, which the
//!   immediate-type handler reports itself.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::opcodes;

/// The three instruction encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-operand format.
    R,
    /// Immediate-operand format (and the catch-all for unknown opcodes).
    I,
    /// Jump-target format.
    J,
}

impl Format {
    /// Selects the handler format for an opcode.
    pub const fn of(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_SPECIAL => Self::R,
            opcodes::OP_J | opcodes::OP_JAL => Self::J,
            _ => Self::I,
        }
    }
}

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction word.
///
/// # Returns
///
/// The instruction's [`Format`] and a [`Decoded`] structure with every field extracted.
pub fn decode(inst: u32) -> (Format, Decoded) {
    let opcode = inst.opcode();
    let decoded = Decoded {
        raw: inst,
        opcode,
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm: inst.simm(),
        target: inst.target(),
    };
    (Format::of(opcode), decoded)
}
