//! Execution units.
//!
//! This module contains the functional units used by the instruction handlers.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
