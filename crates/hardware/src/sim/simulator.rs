//! Simulator: owns the CPU and the host it talks to side-by-side.
//!
//! Keeping the host outside `Cpu` lets the system-call dispatcher borrow it mutably
//! while the CPU mutates its own state.

use tracing::debug;

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::HostIo;

/// Top-level simulator: CPU architectural state plus host I/O.
#[derive(Debug)]
pub struct Simulator<H: HostIo> {
    /// CPU architectural state (registers, PC, RAM, stats).
    pub cpu: Cpu,
    /// Receiver of guest output.
    pub host: H,
    entry: u64,
}

impl<H: HostIo> Simulator<H> {
    /// Creates a new simulator with empty RAM laid out per `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for an invalid machine layout and
    /// [`SimError::Io`] if guest RAM cannot be allocated.
    pub fn new(config: &Config, host: H) -> Result<Self, SimError> {
        let cpu = Cpu::new(config)?;
        Ok(Self {
            cpu,
            host,
            entry: config.entry_pc(),
        })
    }

    /// Loads a flat program image and resets the CPU to the configured entry point.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image exceeds RAM.
    pub fn load(&mut self, image: &[u8]) -> Result<(), SimError> {
        loader::load_image(&mut self.cpu, image, self.entry)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the instruction.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.step(&mut self.host)
    }

    /// Retrieves the exit code if the simulation has finished.
    pub fn take_exit(&mut self) -> Option<u64> {
        self.cpu.take_exit()
    }

    /// Runs until the guest exits, returning its exit code.
    ///
    /// Calling `run` again after the guest exited returns the same code without
    /// executing anything.
    ///
    /// # Errors
    ///
    /// Returns the first fault. The CPU is left at the faulting instruction.
    pub fn run(&mut self) -> Result<u64, SimError> {
        loop {
            if let Some(code) = self.cpu.exit_code {
                debug!(
                    "guest halted after {} instructions ({} syscalls, {} bytes written)",
                    self.cpu.stats.instructions_retired,
                    self.cpu.stats.syscalls,
                    self.cpu.stats.bytes_written
                );
                return Ok(code);
            }
            self.tick()?;
        }
    }
}
