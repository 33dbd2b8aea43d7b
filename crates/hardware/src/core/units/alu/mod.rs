//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the register-type and
//! immediate-type handlers. Operations that the instruction set exposes in
//! signed and unsigned flavours are a single tagged operation here, with the
//! flavour chosen by the handler at dispatch time.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Nor, SetLessThan
//! - [`shifts`]:     Sll, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, nor, slt).
pub mod logic;

/// Shift operations (sll, sra).
pub mod shifts;

/// What an add or subtract does when the signed result does not fit in 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Wrap modulo 2^32 (`addu`, and `add`/`sub`/`addi` unless trapping is enabled).
    Wrap,
    /// Report the overflow so the caller can raise a trap.
    Trap,
}

/// How set-less-than interprets its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signedness {
    /// Two's-complement comparison (`slt`, `slti`).
    Signed,
    /// Unsigned comparison (`sltu`).
    Unsigned,
}

/// Integer ALU operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add(Overflow),
    /// Subtraction.
    Sub(Overflow),
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise NOR.
    Nor,
    /// Set to 1 if `a < b`, else 0.
    SetLessThan(Signedness),
    /// Shift left logical by `b & 31`.
    Sll,
    /// Shift right arithmetic by `b & 31`.
    Sra,
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand (for shifts, the value being shifted).
    /// * `b`  - Second operand (for shifts, the shift amount).
    ///
    /// # Returns
    ///
    /// `Some(result)`, or `None` if the operation is a trapping add/sub that overflowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp, Overflow, Signedness};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add(Overflow::Wrap), 5, 10), Some(15));
    /// assert_eq!(Alu::execute(AluOp::Add(Overflow::Wrap), i32::MAX, 1), Some(i32::MIN));
    /// assert_eq!(Alu::execute(AluOp::Add(Overflow::Trap), i32::MAX, 1), None);
    /// assert_eq!(Alu::execute(AluOp::SetLessThan(Signedness::Signed), -1, 0), Some(1));
    /// assert_eq!(Alu::execute(AluOp::SetLessThan(Signedness::Unsigned), -1, 0), Some(0));
    /// assert_eq!(Alu::execute(AluOp::Sra, -16, 2), Some(-4));
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
        match op {
            AluOp::Add(_) | AluOp::Sub(_) => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Nor | AluOp::SetLessThan(_) => {
                Some(logic::execute(op, a, b))
            }
            AluOp::Sll | AluOp::Sra => Some(shifts::execute(op, a, b)),
        }
    }
}
