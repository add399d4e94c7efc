//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the other components:
//! 1. **Constants:** Instruction sizes, field masks, and process exit codes.
//! 2. **Error Handling:** The fatal fault kinds raised while loading or executing a guest.
//! 3. **Register Management:** The architectural register file interface.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading and execution faults.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{FAULT_EXIT_CODE, INSTRUCTION_SIZE};
pub use error::SimError;
pub use reg::RegisterFile;
