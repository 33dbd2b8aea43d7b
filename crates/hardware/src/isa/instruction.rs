//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding MIPS
//! instruction fields from 32-bit instruction words.

use crate::common::constants::{
    FIVE_BITS, OPCODE_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT, SIX_BITS, SIXTEEN_BITS,
    TWENTYSIX_BITS,
};

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-type destination register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the R-type function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0), without extension.
    fn imm16(&self) -> u32;

    /// Extracts the 16-bit immediate sign-extended to 32 bits.
    fn simm(&self) -> i32;

    /// Extracts the 26-bit jump target (bits 25-0), unscaled.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & FIVE_BITS) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & FIVE_BITS) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & FIVE_BITS) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & FIVE_BITS
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BITS
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & SIXTEEN_BITS
    }

    /// Truncates to `i16` and widens back, which replicates bit 15 into bits 31-16.
    #[inline(always)]
    fn simm(&self) -> i32 {
        i32::from(*self as u16 as i16)
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TWENTYSIX_BITS
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is extracted regardless of format; handlers only look at the ones
/// their format defines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Opcode field.
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index (destination for I-type).
    pub rt: usize,
    /// Destination register index (R-type).
    pub rd: usize,
    /// Shift amount (R-type).
    pub shamt: u32,
    /// Function code (R-type).
    pub funct: u32,
    /// Sign-extended immediate (I-type).
    pub imm: i32,
    /// 26-bit jump target (J-type).
    pub target: u32,
}
