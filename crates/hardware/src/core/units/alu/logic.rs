//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, NOR, and set-less-than (signed and unsigned).
//! The comparison result is always 0 or 1.

use super::{AluOp, Signedness};

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nor => !(a | b),
        AluOp::SetLessThan(Signedness::Signed) => (a < b) as i32,
        AluOp::SetLessThan(Signedness::Unsigned) => ((a as u32) < (b as u32)) as i32,
        _ => 0,
    }
}
