//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Word size, default memory geometry, and field masks.
//! 2. **Memory Access:** Classification of accesses (Fetch/Read/Write) for fault reporting.
//! 3. **Error Handling:** Load errors, console errors, and fatal traps.
//! 4. **Register Management:** The 32-entry general-purpose register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DEFAULT_RAM_SIZE, DEFAULT_STACK_POINTER, WORD_SIZE};
pub use data::AccessType;
pub use error::{Anomaly, ConsoleError, LoadError, Trap};
pub use reg::RegisterFile;
