//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire machine state
//! that the fetch-execute loop mutates:
//! 1. **Registers:** The 32-entry register file, program counter, and text pointer.
//! 2. **Memory:** The bounds-checked byte-addressable memory image.
//! 3. **Semantics:** ISA switches resolved from the configuration (strict mode, overflow
//!    trapping, logical-immediate extension, instruction budget).
//! 4. **Statistics:** Counters updated as instructions retire.

/// Fetch-execute loop and format dispatch.
pub mod execution;

/// Immediate-type instruction handler.
pub mod i_type;

/// Jump-type instruction handler.
pub mod j_type;

/// Effective-address computation and data memory access.
pub mod memory;

/// Register-type instruction handler.
pub mod r_type;

/// Syscall sub-handler.
pub mod syscall;

/// Anomaly reporting policy.
pub mod trap;

pub use execution::StepOutcome;

use crate::common::RegisterFile;
use crate::config::{Config, ImmediateExtension};
use crate::core::units::alu::Overflow;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// Construction zeroes every register except the stack pointer and zeroes memory.
/// The program counter and text pointer both start at 0, so a freshly built machine
/// with nothing loaded is already halted.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter: byte offset of the next instruction to fetch.
    pub pc: u32,
    /// Text pointer: one past the last loaded instruction, and the halt sentinel.
    pub tp: u32,
    /// Byte-addressable memory.
    pub memory: Memory,
    /// Address of the instruction currently (or most recently) executing.
    pub current_pc: u32,
    /// Set when a step ends in a trap; a faulted machine stays halted.
    pub faulted: bool,

    /// Enable per-instruction tracing.
    pub trace: bool,
    /// Promote decode anomalies to fatal traps.
    pub strict: bool,
    /// Optional instruction budget.
    pub max_instructions: Option<u64>,
    /// Overflow behaviour of `add`, `sub`, and `addi`.
    pub overflow: Overflow,
    /// Extension applied to the `andi`/`ori` immediate.
    pub logical_immediate: ImmediateExtension,

    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU instance from the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration.
    pub fn new(config: &Config) -> Self {
        let overflow = if config.isa.trap_on_overflow {
            Overflow::Trap
        } else {
            Overflow::Wrap
        };

        Self {
            regs: RegisterFile::new(config.memory.initial_sp, config.isa.pin_zero_register),
            pc: 0,
            tp: 0,
            memory: Memory::new(config.memory.ram_size),
            current_pc: 0,
            faulted: false,
            trace: config.general.trace_instructions,
            strict: config.general.strict,
            max_instructions: config.general.max_instructions,
            overflow,
            logical_immediate: config.isa.logical_immediate,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` once the program counter has reached the text pointer or a
    /// trap has stopped the machine.
    pub fn is_halted(&self) -> bool {
        self.faulted || self.pc == self.tp
    }

    /// Dumps the current CPU state (PC, TP, and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}  TP = {:#010x}", self.pc, self.tp);
        self.regs.dump();
    }
}
