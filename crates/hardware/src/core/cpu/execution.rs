//! Main Execution Loop.
//!
//! This module implements the fetch-execute cycle of the CPU. Each step:
//! 1. **Termination:** Halts if the program counter equals the text pointer.
//! 2. **Fetch:** Reads the big-endian word at the program counter and advances it by 4.
//! 3. **Decode:** Splits the word into fields and selects the R/I/J handler.
//! 4. **Execute:** Runs the handler and reports anomalies according to the strictness policy.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::error::Anomaly;
use crate::common::{AccessType, Trap};
use crate::isa::decode::{Format, decode};
use crate::isa::disasm::disassemble;
use crate::soc::Console;

/// Result of a single fetch-execute step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was fetched and executed.
    Executed,
    /// An instruction was fetched but not recognized; no state changed besides the PC step.
    Anomaly(Anomaly),
    /// The program counter equals the text pointer; nothing was fetched.
    Halted,
}

impl Cpu {
    /// Executes one fetch-execute step.
    ///
    /// # Arguments
    ///
    /// * `console` - Host console used by the syscall services.
    ///
    /// # Returns
    ///
    /// The [`StepOutcome`], or the [`Trap`] that stopped the machine. After a trap every
    /// further step reports [`StepOutcome::Halted`].
    pub fn step(&mut self, console: &mut dyn Console) -> Result<StepOutcome, Trap> {
        let result = self.execute_step(console);
        if result.is_err() {
            self.faulted = true;
        }
        result
    }

    fn execute_step(&mut self, console: &mut dyn Console) -> Result<StepOutcome, Trap> {
        if self.is_halted() {
            return Ok(StepOutcome::Halted);
        }

        if let Some(limit) = self.max_instructions
            && self.stats.instructions_retired >= limit
        {
            return Err(Trap::InstructionLimit(limit));
        }

        let pc = self.pc;
        let inst = self.memory.read_u32(i64::from(pc), AccessType::Fetch)?;
        self.current_pc = pc;
        self.pc = pc.wrapping_add(WORD_SIZE);

        let (format, decoded) = decode(inst);
        self.stats.record_format(format);

        if self.trace {
            tracing::trace!("{pc:#06x}: {inst:#010x}  {}", disassemble(inst));
        }

        let outcome = match format {
            Format::R => self.execute_r_type(&decoded, console)?,
            Format::I => self.execute_i_type(&decoded)?,
            Format::J => self.execute_j_type(&decoded),
        };

        match outcome {
            StepOutcome::Anomaly(anomaly) => self.report_anomaly(anomaly),
            other => Ok(other),
        }
    }

    /// Transfers control to `target` (branches, jumps, and `jr`).
    pub(super) fn redirect(&mut self, target: u32) {
        self.pc = target;
        self.stats.control_transfers += 1;
    }
}
