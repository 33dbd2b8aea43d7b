//! Simulator: owns the CPU and the host console side by side.
//!
//! The console lives outside `Cpu` so each step can borrow both mutably without
//! storing the console inside the machine state.

use std::fmt;
use std::path::Path;

use crate::common::{LoadError, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::StepOutcome;
use crate::sim::loader;
use crate::soc::Console;

/// Top-level simulator: machine state plus the console behind the syscall services.
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    console: Box<dyn Console>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator with a fresh machine built from `config`.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
        }
    }

    /// Loads already-parsed instruction words.
    pub fn load(&mut self, words: &[u32]) -> Result<(), LoadError> {
        loader::load_into(&mut self.cpu, words)
    }

    /// Reads a program file and loads it, returning the number of words loaded.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        loader::load_file(&mut self.cpu, path)
    }

    /// Executes a single fetch-execute step.
    pub fn tick(&mut self) -> Result<StepOutcome, Trap> {
        self.cpu.step(self.console.as_mut())
    }

    /// Runs until the program halts or a trap stops it.
    ///
    /// # Returns
    ///
    /// The number of instructions executed, including skipped anomalies.
    pub fn run(&mut self) -> Result<u64, Trap> {
        self.cpu.stats.restart_clock();
        while self.tick()? != StepOutcome::Halted {}
        tracing::debug!(
            instructions = self.cpu.stats.instructions_retired,
            anomalies = self.cpu.stats.anomalies,
            "program halted"
        );
        Ok(self.cpu.stats.instructions_retired)
    }
}
