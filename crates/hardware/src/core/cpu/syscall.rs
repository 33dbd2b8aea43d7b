//! Host services reached through the `syscall` instruction.
//!
//! The service code is taken from `$v0` and the argument from `$a0`:
//! 1. **Print integer (1):** Writes `$a0` in decimal.
//! 2. **Print string (4):** Writes the NUL-terminated string at address `$a0`.
//! 3. **Read integer (5):** Reads one whitespace-delimited integer into `$v0`.
//! 4. **Exit (10):** Sets the program counter to the text pointer.

use super::{Cpu, StepOutcome};
use crate::common::Trap;
use crate::common::error::Anomaly;
use crate::isa::abi::{REG_A0, REG_V0};
use crate::isa::syscall;
use crate::soc::Console;

impl Cpu {
    /// Services the syscall selected by `$v0`.
    pub(super) fn syscall(&mut self, console: &mut dyn Console) -> Result<StepOutcome, Trap> {
        self.stats.syscalls += 1;
        let code = self.regs.read(REG_V0);

        match code {
            syscall::PRINT_INT => {
                let value = self.regs.read(REG_A0);
                if self.trace {
                    tracing::trace!("syscall print_int({value})");
                }
                console.print_int(value)?;
            }
            syscall::PRINT_STRING => {
                let addr = i64::from(self.regs.read(REG_A0));
                if self.trace {
                    tracing::trace!("syscall print_string({addr:#x})");
                }
                let bytes = self.memory.read_cstr(addr)?;
                console.print_str(bytes)?;
            }
            syscall::READ_INT => {
                let value = console.read_int()?;
                if self.trace {
                    tracing::trace!("syscall read_int -> {value}");
                }
                self.regs.write(REG_V0, value);
            }
            syscall::EXIT => {
                if self.trace {
                    tracing::trace!("syscall exit");
                }
                self.pc = self.tp;
            }
            _ => return Ok(StepOutcome::Anomaly(Anomaly::UnknownSyscall { code })),
        }
        Ok(StepOutcome::Executed)
    }
}
