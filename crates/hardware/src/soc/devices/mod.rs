//! Host-facing devices.
//!
//! The machine has no memory-mapped peripherals; its only device is the console that
//! backs the syscall services.

/// Stream-backed console (stdin/stdout or in-memory buffers).
pub mod console;

pub use console::{HostConsole, StreamConsole};
