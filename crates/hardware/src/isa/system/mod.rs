//! System Instruction Definitions.
//!
//! # Modules
//!
//! - `opcodes`: The SYSTEM major opcode and the exact `ECALL` encoding.
//! - `syscall`: Call numbers understood by the host system-call dispatcher.

/// System instruction opcodes (ECALL).
pub mod opcodes;

/// Host system-call numbers and their decoded form.
pub mod syscall;
