//! Immediate-type instruction execution.
//!
//! Covers conditional branches, immediate arithmetic and logic, `lui`, and the
//! load/store instructions. Results land in `rt`.

use super::{Cpu, StepOutcome};
use crate::common::Trap;
use crate::common::constants::SIXTEEN_BITS;
use crate::common::error::Anomaly;
use crate::config::ImmediateExtension;
use crate::core::units::alu::{Alu, AluOp, Signedness};
use crate::isa::instruction::Decoded;
use crate::isa::opcodes;

impl Cpu {
    /// Executes an I-type instruction.
    ///
    /// Branch targets are absolute: a taken branch loads the sign-extended immediate
    /// straight into the program counter.
    pub(super) fn execute_i_type(&mut self, d: &Decoded) -> Result<StepOutcome, Trap> {
        match d.opcode {
            opcodes::OP_BEQ => {
                if self.regs.read(d.rs) == self.regs.read(d.rt) {
                    self.redirect(d.imm as u32);
                }
            }
            opcodes::OP_BNE => {
                if self.regs.read(d.rs) != self.regs.read(d.rt) {
                    self.redirect(d.imm as u32);
                }
            }
            opcodes::OP_ADDI => self.alu_immediate(d, AluOp::Add(self.overflow), d.imm)?,
            opcodes::OP_SLTI => {
                self.alu_immediate(d, AluOp::SetLessThan(Signedness::Signed), d.imm)?;
            }
            opcodes::OP_ANDI => self.alu_immediate(d, AluOp::And, self.logical_imm(d))?,
            opcodes::OP_ORI => self.alu_immediate(d, AluOp::Or, self.logical_imm(d))?,
            opcodes::OP_LUI => self.regs.write(d.rt, ((d.raw & SIXTEEN_BITS) << 16) as i32),
            opcodes::OP_LW => {
                let value = self.load_word(self.effective_address(d))?;
                self.regs.write(d.rt, value as i32);
            }
            opcodes::OP_LHU => {
                let value = self.load_halfword(self.effective_address(d))?;
                self.regs.write(d.rt, i32::from(value));
            }
            opcodes::OP_SW => {
                let value = self.regs.read_u32(d.rt);
                self.store_word(self.effective_address(d), value)?;
            }
            _ => {
                return Ok(StepOutcome::Anomaly(Anomaly::UnknownOpcode {
                    opcode: d.opcode,
                    raw: d.raw,
                }));
            }
        }
        Ok(StepOutcome::Executed)
    }

    /// Computes `rt = rs <op> imm`.
    fn alu_immediate(&mut self, d: &Decoded, op: AluOp, imm: i32) -> Result<(), Trap> {
        let value = Alu::execute(op, self.regs.read(d.rs), imm).ok_or(Trap::IntegerOverflow)?;
        self.regs.write(d.rt, value);
        Ok(())
    }

    /// Widens the immediate of `andi`/`ori` per the configured extension.
    const fn logical_imm(&self, d: &Decoded) -> i32 {
        match self.logical_immediate {
            ImmediateExtension::Sign => d.imm,
            ImmediateExtension::Zero => (d.raw & SIXTEEN_BITS) as i32,
        }
    }
}
