//! Core processor implementation.
//!
//! This module contains the CPU state object, the instruction handlers, and the
//! execution units they use.

/// CPU state, fetch-execute loop, and instruction handlers.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
