//! Binary Loader and System Initialization.
//!
//! This module provides utilities for loading binaries and setting up the initial CPU state. It performs:
//! 1. **Binary loading:** Reads a flat bare-metal image from disk into a byte buffer.
//! 2. **Placement:** Copies the image verbatim to the start of guest RAM (image offset 0 at the RAM base).
//! 3. **Reset:** Zeroes the register file and points the PC at the entry address.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::core::Cpu;

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Places `image` at the RAM base and resets the CPU to start at `entry`.
///
/// # Arguments
///
/// * `cpu` - CPU whose RAM receives the image.
/// * `image` - Raw flat-binary contents.
/// * `entry` - Absolute guest address of the first instruction.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image does not fit in RAM. Neither RAM
/// nor the CPU state is modified in that case.
pub fn load_image(cpu: &mut Cpu, image: &[u8], entry: u64) -> Result<(), SimError> {
    cpu.memory.load(image)?;
    cpu.regs.reset();
    cpu.pc = entry;
    cpu.exit_code = None;
    debug!(
        "loaded {} bytes into RAM [{:#x}, {:#x}), entry {:#x}",
        image.len(),
        cpu.memory.base(),
        cpu.memory.end(),
        entry
    );
    Ok(())
}
