//! RISC-V architecture-specific components.
//!
//! The simulator models a single hart with no privileged state, so the architectural
//! state beyond the program counter is just the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;
