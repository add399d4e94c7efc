//! Builders for test programs.

/// Fluent encoder for single instructions.
pub mod instruction;
