//! Minimal RISC-V system simulator library.
//!
//! This crate implements a single-hart RV64 instruction-set simulator that is just large
//! enough to run bare-metal "hello world" images:
//! 1. **Core:** Register file, program counter, and the fetch/decode/execute loop.
//! 2. **Memory:** A flat guest RAM region mapped at a configurable base address.
//! 3. **ISA:** Decoding and disassembly for immediate loads, memory loads, and `ECALL`.
//! 4. **Host:** The system-call dispatcher (`write`, `exit`) and the host I/O seam.
//! 5. **Simulation:** Loader, configuration, and statistics collection.

/// Common types and constants (errors, register file, instruction sizes).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (architectural state, execution, system-call dispatch).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, disassembly).
pub mod isa;
/// Binary loader and the top-level run loop.
pub mod sim;
/// Guest memory and host I/O.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, program counter, RAM, and stats.
pub use crate::core::Cpu;
/// Top-level simulator pairing a CPU with a host I/O implementation.
pub use crate::sim::Simulator;
/// Error type shared by every fallible simulator operation.
pub use crate::common::SimError;
