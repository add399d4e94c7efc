use rvmini_core::config::Config;
use rvmini_core::core::Cpu;
use rvmini_core::soc::BufferHost;
use rvmini_core::{SimError, Simulator};

use super::builder::program::assemble;

/// RAM base used by every test machine.
pub const RAM_BASE: u64 = 0x8000_0000;

/// Small RAM so bounds are easy to reach.
pub const RAM_SIZE: usize = 64 * 1024;

pub struct TestContext {
    pub sim: Simulator<BufferHost>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&test_config())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let sim = Simulator::new(config, BufferHost::new()).expect("test machine");
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions at the RAM base and set the PC.
    pub fn load_program(self, instructions: &[u32]) -> Self {
        self.load_image(&assemble(instructions))
    }

    /// Load a raw image at the RAM base and set the PC.
    pub fn load_image(mut self, image: &[u8]) -> Self {
        self.sim.load(image).expect("image fits");
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u64) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u64 {
        self.sim.cpu.pc
    }

    /// Execute a single instruction.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.sim.tick()
    }

    /// Execute `n` instructions, panicking on the first fault.
    pub fn run(&mut self, n: usize) {
        for _ in 0..n {
            self.step().expect("instruction faulted");
        }
    }

    /// Run until the guest exits.
    pub fn run_to_exit(&mut self) -> Result<u64, SimError> {
        self.sim.run()
    }

    /// Everything the guest has written so far.
    pub fn output(&self) -> &[u8] {
        self.sim.host.bytes()
    }
}

/// Default configuration with a small RAM.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.memory.ram_base = RAM_BASE;
    config.memory.ram_size = RAM_SIZE;
    config
}
