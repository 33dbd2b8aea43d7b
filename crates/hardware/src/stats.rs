//! Execution statistics collection and reporting.
//!
//! This module tracks what the fetch-execute loop did during a run. It provides:
//! 1. **Throughput:** Retired instructions and host time (MIPS).
//! 2. **Instruction mix:** Counts by format (R/I/J) and category (load, store, control, syscall).
//! 3. **Anomalies:** Unknown opcodes, functs, and syscalls that were skipped.

use std::time::Instant;

use crate::isa::decode::Format;

/// Execution statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions fetched and executed (including anomalous ones).
    pub instructions_retired: u64,

    /// Count of register-type instructions.
    pub inst_r_type: u64,
    /// Count of immediate-type instructions.
    pub inst_i_type: u64,
    /// Count of jump-type instructions.
    pub inst_j_type: u64,

    /// Count of load instructions (`lw`, `lhu`).
    pub inst_load: u64,
    /// Count of store instructions (`sw`).
    pub inst_store: u64,
    /// Count of control transfers that redirected the program counter.
    pub control_transfers: u64,
    /// Count of `syscall` instructions.
    pub syscalls: u64,
    /// Count of decode anomalies skipped in non-strict mode.
    pub anomalies: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_r_type: 0,
            inst_i_type: 0,
            inst_j_type: 0,
            inst_load: 0,
            inst_store: 0,
            control_transfers: 0,
            syscalls: 0,
            anomalies: 0,
        }
    }
}

impl SimStats {
    /// Records one fetched instruction of the given format.
    pub fn record_format(&mut self, format: Format) {
        self.instructions_retired += 1;
        match format {
            Format::R => self.inst_r_type += 1,
            Format::I => self.inst_i_type += 1,
            Format::J => self.inst_j_type += 1,
        }
    }

    /// Restarts the host clock; called when execution begins so load time is excluded.
    pub fn restart_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// Host seconds elapsed since the clock was last started.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Prints the statistics to stdout.
    pub fn print(&self) {
        let seconds = self.host_seconds();
        let instr = self.instructions_retired.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("EXECUTION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  format.r               {} ({:.2}%)", self.inst_r_type, pct(self.inst_r_type));
        println!("  format.i               {} ({:.2}%)", self.inst_i_type, pct(self.inst_i_type));
        println!("  format.j               {} ({:.2}%)", self.inst_j_type, pct(self.inst_j_type));
        println!("  load                   {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  store                  {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!(
            "  control_transfers      {} ({:.2}%)",
            self.control_transfers,
            pct(self.control_transfers)
        );
        println!("  syscalls               {}", self.syscalls);
        println!("  anomalies              {}", self.anomalies);
        println!("==========================================================");
    }
}
