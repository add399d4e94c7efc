//! # Unit Components
//!
//! Tests for each component of the simulator, laid out like the source tree.



/// Unit tests for the CPU core: registers, execution, and system-call dispatch.
pub mod core;
