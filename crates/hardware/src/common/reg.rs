//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the execution core and
//! the system-call dispatcher use to access the integer registers. It provides:
//! 1. **Storage:** The 32 RV64 general-purpose registers, backed by [`Gpr`].
//! 2. **Signed Views:** Word-sized signed reads for exit codes and diagnostics.
//! 3. **Observability:** A formatted dump of every register under its ABI name.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi;

/// Register file containing the general-purpose integer registers.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Reads a general-purpose register as a signed word.
    pub fn read_signed(&self, idx: usize) -> i64 {
        self.gpr.read(idx) as i64
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, val);
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.gpr = Gpr::new();
    }
}

impl fmt::Display for RegisterFile {
    /// Formats all registers in pairs, labelled with their ABI names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "{:>4} (x{:<2}) = {:#018x}   {:>4} (x{:<2}) = {:#018x}",
                abi::name(i),
                i,
                self.read(i),
                abi::name(i + 1),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
