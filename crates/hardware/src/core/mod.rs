//! Core processor implementation.
//!
//! This module contains the CPU state, the fetch/decode/execute loop, and the
//! system-call dispatcher invoked by `ECALL`.

/// Architecture-specific components (register storage).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

pub use self::cpu::Cpu;
