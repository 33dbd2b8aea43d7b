//! MIPS-subset instruction-set emulator library.
//!
//! This crate executes programs for a 32-bit MIPS-like machine with the following:
//! 1. **Core:** 32 general-purpose registers, a program counter, and a fetch-execute loop
//!    over R, I, and J instruction formats.
//! 2. **Memory:** A flat big-endian byte image with bounds-checked word and halfword access.
//! 3. **ISA:** Field extraction, format dispatch, and a disassembler for tracing.
//! 4. **SoC:** The console behind the print/read/exit syscall services.
//! 5. **Simulation:** Hex text loader, JSON configuration, and statistics collection.

/// Common types and constants (registers, traps, access types).
pub mod common;
/// Emulator configuration (defaults, ISA switches, JSON loading).
pub mod config;
/// CPU core (state, execution, ALU).
pub mod core;
/// Instruction set (fields, decode, ABI names, opcodes, disassembly).
pub mod isa;
/// Program loader and simulator.
pub mod sim;
/// Memory image and host console.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
