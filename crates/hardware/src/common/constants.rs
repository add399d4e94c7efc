//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction width and register count.
//! 2. **Process Constants:** Exit codes reported at the host process boundary.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of general-purpose integer registers.
pub const NUM_GPRS: usize = 32;

/// Host exit status used when emulation aborts on a fault instead of a guest `exit` call.
pub const FAULT_EXIT_CODE: i32 = 102;
