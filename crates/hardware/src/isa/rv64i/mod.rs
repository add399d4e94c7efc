//! RISC-V Base Integer Instruction Set (I).
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes for the supported subset (Load, OpImm, OpImm32, Lui, Auipc).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Base integer instruction set opcodes.
pub mod opcodes;
