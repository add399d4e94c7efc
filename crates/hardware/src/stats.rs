//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Retirement:** Total retired instructions and derived throughput (MIPS).
//! 2. **Instruction mix:** Counts by category (ALU, load, system).
//! 3. **Host traffic:** System calls serviced and bytes written to the host.

use std::fmt;
use std::time::{Duration, Instant};

use crate::isa::instruction::Op;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of immediate/upper-immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of integer load instructions retired.
    pub inst_load: u64,
    /// Count of system (`ECALL`) instructions retired.
    pub inst_system: u64,

    /// Number of system calls serviced.
    pub syscalls: u64,
    /// Number of bytes handed to the host by `write`.
    pub bytes_written: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_system: 0,
            syscalls: 0,
            bytes_written: 0,
        }
    }
}

impl SimStats {
    /// Records the retirement of one instruction.
    pub fn retire(&mut self, op: &Op) {
        self.instructions_retired += 1;
        match op {
            Op::Addi { .. } | Op::Addiw { .. } | Op::Lui { .. } | Op::Auipc { .. } => {
                self.inst_alu += 1;
            }
            Op::Load { .. } => self.inst_load += 1,
            Op::Ecall => self.inst_system += 1,
        }
    }

    /// Wall-clock time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Millions of instructions retired per wall-clock second.
    #[allow(clippy::cast_precision_loss)]
    pub fn mips(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.instructions_retired as f64 / secs / 1_000_000.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host.seconds             {:.6} s", self.elapsed().as_secs_f64())?;
        writeln!(f, "sim.instructions         {}", self.instructions_retired)?;
        writeln!(f, "sim.mips                 {:.2}", self.mips())?;
        writeln!(f, "inst.alu                 {}", self.inst_alu)?;
        writeln!(f, "inst.load                {}", self.inst_load)?;
        writeln!(f, "inst.system              {}", self.inst_system)?;
        writeln!(f, "host.syscalls            {}", self.syscalls)?;
        writeln!(f, "host.bytes_written       {}", self.bytes_written)
    }
}
