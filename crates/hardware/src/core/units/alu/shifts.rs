//! ALU shift operations.
//!
//! Implements shift-left logical (SLL) and shift-right arithmetic (SRA).
//! Shift amounts are masked to 5 bits (0-31); the `shamt` field is 5 bits wide,
//! so the mask only matters for direct callers.

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 5 bits used).
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let sh = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => a.wrapping_shl(sh),
        AluOp::Sra => a >> sh,
        _ => 0,
    }
}
