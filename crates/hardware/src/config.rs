//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (RAM base and size, entry point).
//! 2. **Structures:** Config split into general (tracing, entry) and memory sections.
//! 3. **Validation:** Rejection of machines that cannot hold or start a program.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`
//! and adjusted by the CLI.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Base address of guest RAM (2 GiB).
    ///
    /// Byte 0 of a flat program image is loaded here, matching the usual
    /// `0x8000_0000` link address of bare-metal RISC-V programs.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of guest RAM (128 MiB).
    ///
    /// Accesses beyond `RAM_BASE + RAM_SIZE` raise a memory fault.
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;

    /// Offset of the entry point from `RAM_BASE` (the first byte of the image).
    pub const ENTRY_OFFSET: u64 = 0;
}

/// Root configuration structure.
///
/// Every section and field is optional in JSON; omitted values take their defaults.
///
/// # Example
///
/// ```
/// use rvmini_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "ram_size": 65536 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// assert_eq!(config.memory.ram_size, 65536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Guest RAM layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for malformed JSON or an invalid machine.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that RAM is non-empty, does not wrap the address space, and contains
    /// the entry point.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), SimError> {
        let MemoryConfig { ram_base, ram_size } = self.memory;
        if ram_size == 0 {
            return Err(SimError::InvalidConfig("ram_size must be non-zero".into()));
        }
        if ram_base.checked_add(ram_size as u64).is_none() {
            return Err(SimError::InvalidConfig(format!(
                "RAM of {ram_size} bytes at {ram_base:#x} wraps the address space"
            )));
        }
        if self.general.entry_offset >= ram_size as u64 {
            return Err(SimError::InvalidConfig(format!(
                "entry offset {:#x} lies outside {ram_size} bytes of RAM",
                self.general.entry_offset
            )));
        }
        Ok(())
    }

    /// Returns the absolute guest address execution starts at.
    pub const fn entry_pc(&self) -> u64 {
        self.memory.ram_base.wrapping_add(self.general.entry_offset)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction (PC, encoding, disassembly) at `trace` level.
    ///
    /// Off by default; the log filter must also admit `trace` events.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Entry point as a byte offset from `memory.ram_base` (defaults to the first byte of the image).
    #[serde(default = "GeneralConfig::default_entry_offset")]
    pub entry_offset: u64,
}

impl GeneralConfig {
    /// Returns the default entry offset.
    const fn default_entry_offset() -> u64 {
        defaults::ENTRY_OFFSET
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            entry_offset: defaults::ENTRY_OFFSET,
        }
    }
}

/// Guest RAM configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Guest address where byte 0 of the program image is loaded
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,

    /// RAM capacity in bytes; images larger than this are rejected
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default RAM base address.
    const fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}
