//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction. Wrapping variants reduce the result
//! modulo 2^32; trapping variants report signed overflow as `None`.

use super::{AluOp, Overflow};

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The result, or `None` on signed overflow of an [`Overflow::Trap`] operation.
/// Returns `Some(0)` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
    match op {
        AluOp::Add(Overflow::Wrap) => Some(a.wrapping_add(b)),
        AluOp::Add(Overflow::Trap) => a.checked_add(b),
        AluOp::Sub(Overflow::Wrap) => Some(a.wrapping_sub(b)),
        AluOp::Sub(Overflow::Trap) => a.checked_sub(b),
        _ => Some(0),
    }
}
