//! Data Memory Access.
//!
//! This module implements the load/store path of the CPU. It performs the following:
//! 1. **Address Generation:** Adds the sign-extended offset to the base register in
//!    64-bit arithmetic, so a negative or overflowing sum faults instead of wrapping.
//! 2. **Access:** Delegates to the bounds-checked memory and counts the transfer.

use super::Cpu;
use crate::common::{AccessType, Trap};
use crate::isa::instruction::Decoded;

impl Cpu {
    /// Returns `rs + imm` as an unwrapped effective address.
    pub(super) fn effective_address(&self, d: &Decoded) -> i64 {
        i64::from(self.regs.read(d.rs)) + i64::from(d.imm)
    }

    /// Loads a big-endian word.
    pub(super) fn load_word(&mut self, addr: i64) -> Result<u32, Trap> {
        let value = self.memory.read_u32(addr, AccessType::Read)?;
        self.stats.inst_load += 1;
        Ok(value)
    }

    /// Loads a big-endian halfword.
    pub(super) fn load_halfword(&mut self, addr: i64) -> Result<u16, Trap> {
        let value = self.memory.read_u16(addr, AccessType::Read)?;
        self.stats.inst_load += 1;
        Ok(value)
    }

    /// Stores a big-endian word.
    pub(super) fn store_word(&mut self, addr: i64, value: u32) -> Result<(), Trap> {
        self.memory.write_u32(addr, value)?;
        self.stats.inst_store += 1;
        Ok(())
    }
}
