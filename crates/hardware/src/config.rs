//! Configuration system for the emulator.
//!
//! This module defines all configuration structures used to parameterize the machine.
//! It provides:
//! 1. **Defaults:** Baseline constants matching the reference machine (8 KiB memory,
//!    stack pointer at `0x2000`, no overflow traps, sign-extended logical immediates).
//! 2. **Structures:** Hierarchical config for general, memory, and ISA behaviour.
//! 3. **Loading:** JSON deserialization with per-field defaults and validation.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::{DEFAULT_RAM_SIZE, DEFAULT_STACK_POINTER, WORD_SIZE};

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has fields of the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured memory size cannot back a 32-bit word-addressed machine.
    #[error("ram_size must be a non-zero multiple of 4 no larger than 4 GiB, got {0}")]
    InvalidRamSize(usize),
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, ImmediateExtension};
///
/// let json = r#"{ "general": { "strict": true }, "isa": { "logical_immediate": "zero" } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.strict);
/// assert_eq!(config.isa.logical_immediate, ImmediateExtension::Zero);
/// assert_eq!(config.memory.ram_size, 8192);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Instruction semantics switches.
    #[serde(default)]
    pub isa: IsaConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the memory size is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.ram_size;
        let fits = size as u64 <= 1_u64 << 32;
        if size == 0 || size % WORD_SIZE as usize != 0 || !fits {
            return Err(ConfigError::InvalidRamSize(size));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction and syscall.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Treat decode anomalies (unknown opcode, funct, or syscall) as fatal traps.
    #[serde(default)]
    pub strict: bool,

    /// Upper bound on executed instructions. `None` runs until the program halts,
    /// which never happens for a program stuck in a loop.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Memory geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Memory capacity in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,

    /// Initial value of the stack pointer register.
    #[serde(default = "MemoryConfig::default_initial_sp")]
    pub initial_sp: u32,
}

impl MemoryConfig {
    /// Returns the default memory capacity (8 KiB).
    fn default_ram_size() -> usize {
        DEFAULT_RAM_SIZE
    }

    /// Returns the default stack pointer (`0x2000`).
    fn default_initial_sp() -> u32 {
        DEFAULT_STACK_POINTER
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: DEFAULT_RAM_SIZE,
            initial_sp: DEFAULT_STACK_POINTER,
        }
    }
}

/// How the 16-bit immediate of `andi` and `ori` is widened to 32 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImmediateExtension {
    /// Replicate bit 15 (reference behaviour).
    #[default]
    Sign,
    /// Fill the upper half with zeros (standard MIPS behaviour).
    Zero,
}

/// Instruction semantics switches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsaConfig {
    /// Hardwire `$0` to zero.
    #[serde(default)]
    pub pin_zero_register: bool,

    /// Raise [`Trap::IntegerOverflow`](crate::common::Trap::IntegerOverflow) when `add`,
    /// `sub`, or `addi` overflow instead of wrapping.
    #[serde(default)]
    pub trap_on_overflow: bool,

    /// Extension applied to the immediate of `andi` and `ori`.
    #[serde(default)]
    pub logical_immediate: ImmediateExtension,
}
