//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! subset of RV64 the simulator executes.
//!
//! # Modules
//!
//! * `rv64i`: Base integer opcodes and function codes (immediates, loads).
//! * `system`: The `ECALL` encoding and the system-call numbers it dispatches on.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for the I-type and U-type formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded operation type.
pub mod instruction;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;

/// System instruction encodings and host system-call numbers.
pub mod system;
