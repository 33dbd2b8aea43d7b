//! Register-type instruction execution.
//!
//! Dispatches on the function field. Arithmetic and logical operations go through the
//! ALU; `jr` redirects the program counter and `syscall` enters the service handler.

use super::{Cpu, StepOutcome};
use crate::common::Trap;
use crate::common::error::Anomaly;
use crate::core::units::alu::{Alu, AluOp, Overflow, Signedness};
use crate::isa::funct;
use crate::isa::instruction::Decoded;
use crate::soc::Console;

impl Cpu {
    /// Executes an R-type instruction.
    ///
    /// Shifts take `rt` as the value and `shamt` as the distance; every other ALU
    /// operation reads `rs` and `rt`. The result always lands in `rd`.
    pub(super) fn execute_r_type(
        &mut self,
        d: &Decoded,
        console: &mut dyn Console,
    ) -> Result<StepOutcome, Trap> {
        let op = match d.funct {
            funct::SLL => AluOp::Sll,
            funct::SRA => AluOp::Sra,
            funct::ADD => AluOp::Add(self.overflow),
            funct::ADDU => AluOp::Add(Overflow::Wrap),
            funct::SUB => AluOp::Sub(self.overflow),
            funct::AND => AluOp::And,
            funct::OR => AluOp::Or,
            funct::NOR => AluOp::Nor,
            funct::SLT => AluOp::SetLessThan(Signedness::Signed),
            funct::SLTU => AluOp::SetLessThan(Signedness::Unsigned),
            funct::JR => {
                let target = self.regs.read_u32(d.rs);
                self.redirect(target);
                return Ok(StepOutcome::Executed);
            }
            funct::SYSCALL => return self.syscall(console),
            _ => {
                return Ok(StepOutcome::Anomaly(Anomaly::UnknownFunct {
                    funct: d.funct,
                    raw: d.raw,
                }));
            }
        };

        let (a, b) = match op {
            AluOp::Sll | AluOp::Sra => (self.regs.read(d.rt), d.shamt as i32),
            _ => (self.regs.read(d.rs), self.regs.read(d.rt)),
        };
        let value = Alu::execute(op, a, b).ok_or(Trap::IntegerOverflow)?;
        self.regs.write(d.rd, value);
        Ok(StepOutcome::Executed)
    }
}
