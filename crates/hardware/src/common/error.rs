//! Simulator fault definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fault Representation:** Every fatal condition raised while loading or running a guest.
//! 2. **Diagnostics:** Fault kind names plus the faulting PC, address, or encoding.
//! 3. **Process Boundary:** Mapping of faults to the host exit status.
//!
//! None of these faults are recoverable: the guest either reaches an explicit `exit`
//! system call or the whole emulation aborts with one of these values.

use std::io;

use thiserror::Error;

use super::constants::FAULT_EXIT_CODE;

/// Fatal simulator faults.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image does not fit in guest RAM.
    ///
    /// Raised by the loader before any instruction executes.
    #[error("ImageTooLarge: image is {size} bytes but guest RAM holds {capacity} bytes")]
    ImageTooLarge {
        /// Size of the rejected image in bytes.
        size: usize,
        /// Capacity of guest RAM in bytes.
        capacity: usize,
    },

    /// The instruction at `pc` is not part of the supported subset.
    #[error("IllegalInstruction({inst:#010x}) at pc {pc:#x}")]
    IllegalInstruction {
        /// Address of the faulting instruction.
        pc: u64,
        /// Raw 32-bit encoding of the faulting instruction.
        inst: u32,
    },

    /// A fetch, load, or system-call buffer fell outside guest RAM.
    #[error("MemoryFault: access of {len} bytes at {addr:#x} outside guest RAM (pc {pc:#x})")]
    MemoryFault {
        /// Address of the instruction that made the access.
        pc: u64,
        /// First byte of the rejected access.
        addr: u64,
        /// Length of the rejected access in bytes.
        len: u64,
    },

    /// `ECALL` was executed with a call number the dispatcher does not implement.
    #[error("UnsupportedSyscall({number}) at pc {pc:#x}")]
    UnsupportedSyscall {
        /// Address of the `ECALL` instruction.
        pc: u64,
        /// Value of the call-number register (`a7`).
        number: u64,
    },

    /// The configuration cannot describe a runnable machine.
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    /// Host I/O failed (reading the image or writing guest output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SimError {
    /// Returns the short name of this fault kind, e.g. `"MemoryFault"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ImageTooLarge { .. } => "ImageTooLarge",
            Self::IllegalInstruction { .. } => "IllegalInstruction",
            Self::MemoryFault { .. } => "MemoryFault",
            Self::UnsupportedSyscall { .. } => "UnsupportedSyscall",
            Self::InvalidConfig(_) => "InvalidConfig",
            Self::Io(_) => "Io",
        }
    }

    /// Returns the guest program counter at which the fault was raised, if any.
    ///
    /// Faults raised before execution starts (loading, configuration, host I/O) have no PC.
    pub fn pc(&self) -> Option<u64> {
        match self {
            Self::IllegalInstruction { pc, .. }
            | Self::MemoryFault { pc, .. }
            | Self::UnsupportedSyscall { pc, .. } => Some(*pc),
            Self::ImageTooLarge { .. } | Self::InvalidConfig(_) | Self::Io(_) => None,
        }
    }

    /// Returns the host process exit status to report for this fault.
    #[allow(clippy::unused_self)]
    pub const fn exit_code(&self) -> i32 {
        FAULT_EXIT_CODE
    }
}
