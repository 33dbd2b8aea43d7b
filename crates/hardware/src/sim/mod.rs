//! Program loading and the top-level run loop.
//!
//! Provides the text-image loader and the `Simulator` that drives a `Cpu`
//! against a host console.

/// Hex text image parsing and placement.
pub mod loader;

/// CPU plus console, and the run loop.
pub mod simulator;

pub use simulator::Simulator;
