//! Jump-type instruction execution.

use super::{Cpu, StepOutcome};
use crate::common::error::Anomaly;
use crate::isa::abi::REG_RA;
use crate::isa::instruction::Decoded;
use crate::isa::opcodes;

impl Cpu {
    /// Executes `j` or `jal`. The 26-bit target is used as an absolute byte address.
    ///
    /// `jal` links the address of the following instruction, which is the already
    /// advanced program counter.
    pub(super) fn execute_j_type(&mut self, d: &Decoded) -> StepOutcome {
        match d.opcode {
            opcodes::OP_J => self.redirect(d.target),
            opcodes::OP_JAL => {
                self.regs.write(REG_RA, self.pc as i32);
                self.redirect(d.target);
            }
            _ => {
                return StepOutcome::Anomaly(Anomaly::UnknownOpcode {
                    opcode: d.opcode,
                    raw: d.raw,
                });
            }
        }
        StepOutcome::Executed
    }
}
