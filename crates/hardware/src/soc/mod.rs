//! System components around the CPU.
//!
//! This module groups the pieces of machine state and host plumbing that the CPU
//! core drives:
//! 1. **Memory:** The bounds-checked, big-endian memory image.
//! 2. **Console:** The `Console` trait and its stream-backed implementation used by syscalls.

/// Host-facing devices (console).
pub mod devices;

/// System memory (byte buffer and checked accessors).
pub mod memory;

/// Device traits.
pub mod traits;

pub use devices::{HostConsole, StreamConsole};
pub use memory::Memory;
pub use traits::Console;
