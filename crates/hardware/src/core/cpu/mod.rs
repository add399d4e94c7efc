//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire guest state:
//! 1. **State Management:** Register file and program counter.
//! 2. **Memory:** The guest RAM image the program was loaded into.
//! 3. **Termination:** The exit code latched by the `exit` system call.
//! 4. **Observability:** Instruction tracing flag and run statistics.

/// Fetch/decode/execute loop.
pub mod execution;

/// System-call dispatch for `ECALL`.
pub mod trap;

use std::fmt::Write as _;

use crate::common::{RegisterFile, SimError};
use crate::config::Config;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all guest state.
#[derive(Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u64,
    /// Guest RAM.
    pub memory: Memory,
    /// Enable instruction tracing.
    ///
    /// The per-instruction `trace!` event is only emitted while this is set, so a
    /// `trace` log filter alone does not produce an instruction trace.
    pub trace: bool,
    /// Exit code if the guest requested termination.
    pub exit_code: Option<u64>,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with zeroed registers and empty RAM laid out per `config`.
    ///
    /// The program counter starts at the configured entry point.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] or [`SimError::Io`] if guest RAM cannot be created.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let memory = Memory::new(config.memory.ram_base, config.memory.ram_size)?;
        Ok(Self {
            regs: RegisterFile::new(),
            pc: config.entry_pc(),
            memory,
            trace: config.general.trace_instructions,
            exit_code: None,
            stats: SimStats::default(),
        })
    }

    /// Returns `true` once the guest has requested termination.
    pub const fn halted(&self) -> bool {
        self.exit_code.is_some()
    }

    /// Retrieves the exit code if the simulation has finished.
    ///
    /// # Returns
    ///
    /// `Some(u64)` containing the exit code if finished, otherwise `None`.
    pub fn take_exit(&mut self) -> Option<u64> {
        self.exit_code.take()
    }

    /// Formats the current CPU state (PC, the instruction at PC, and registers).
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let inst = self.memory.read_u32(self.pc).map_or_else(
            || "<outside RAM>".to_string(),
            |raw| format!("{raw:#010x}  {}", crate::isa::disasm::disassemble(raw)),
        );
        let _ = writeln!(out, "PC = {:#018x}  [{inst}]", self.pc);
        let _ = write!(out, "{}", self.regs);
        out
    }
}
