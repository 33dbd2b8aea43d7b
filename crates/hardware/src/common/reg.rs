//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct, which holds the 32 architectural
//! registers of the machine. It provides:
//! 1. **Storage:** 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Zero Register Policy:** Register `$0` is an ordinary register unless pinning is enabled.
//! 3. **Observability:** Debugging utilities for dumping register state after a run or fault.

use std::fmt;

use super::constants::NUM_REGISTERS;
use crate::isa::abi;

/// General-purpose register file.
///
/// The reference machine never forces `$0` to zero, so by default it behaves like any
/// other register. With `pin_zero` set, reads of `$0` return 0 and writes are discarded,
/// matching standard MIPS hardware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGISTERS],
    pin_zero: bool,
}

impl RegisterFile {
    /// Creates a register file with every register zero except the stack pointer.
    ///
    /// # Arguments
    ///
    /// * `sp` - Initial value of `$sp` (register 29).
    /// * `pin_zero` - Whether `$0` is hardwired to zero.
    pub fn new(sp: u32, pin_zero: bool) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[abi::REG_SP] = sp as i32;
        Self { regs, pin_zero }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Instruction fields are 5 bits wide, so every
    ///   decoded index is in range.
    pub fn read(&self, idx: usize) -> i32 {
        if self.pin_zero && idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Reads a register reinterpreted as an unsigned 32-bit value.
    pub fn read_u32(&self, idx: usize) -> u32 {
        self.read(idx) as u32
    }

    /// Writes a register. Writes to `$0` are discarded when the zero register is pinned.
    pub fn write(&mut self, idx: usize, val: i32) {
        if !(self.pin_zero && idx == abi::REG_ZERO) {
            self.regs[idx] = val;
        }
    }

    /// Returns `true` if `$0` is hardwired to zero.
    pub fn pins_zero(&self) -> bool {
        self.pin_zero
    }

    /// Returns a copy of all 32 register values, as observed through [`read`](Self::read).
    pub fn snapshot(&self) -> [i32; NUM_REGISTERS] {
        std::array::from_fn(|i| self.read(i))
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGISTERS).step_by(2) {
            writeln!(
                f,
                "${:<2} {:<5}={:#010x} ({:>11})  ${:<2} {:<5}={:#010x} ({:>11})",
                i,
                abi::reg_name(i),
                self.read_u32(i),
                self.read(i),
                i + 1,
                abi::reg_name(i + 1),
                self.read_u32(i + 1),
                self.read(i + 1),
            )?;
        }
        Ok(())
    }
}
