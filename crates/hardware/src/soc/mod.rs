//! System Components.
//!
//! This module organizes the components that surround the hart: guest RAM and
//! the host-side console that system calls write to.

/// Host console implementations (stdout and in-memory capture).
pub mod console;

/// Guest RAM and its backing buffer.
pub mod memory;

/// Host I/O trait definitions.
pub mod traits;

pub use console::{BufferHost, StdoutHost};
pub use memory::Memory;
pub use traits::HostIo;
