//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle of the CPU. Each step:
//! 1. **Fetch:** Reads the 32-bit word at the PC, faulting if the PC has left RAM.
//! 2. **Decode:** Classifies the word, faulting on anything outside the supported subset.
//! 3. **Execute:** Updates registers, reads memory, or hands `ECALL` to the dispatcher.
//! 4. **Retire:** Counts the instruction and advances the PC by one instruction width.
//!
//! A faulting instruction leaves the PC pointing at itself and commits no register writes.
//! Instructions are traced only when `Cpu::trace` is set.

use tracing::trace;

use super::Cpu;
use crate::common::{INSTRUCTION_SIZE, SimError};
use crate::isa::decode::decode_op;
use crate::isa::disasm::format_op;
use crate::isa::instruction::{LoadKind, Op};
use crate::soc::HostIo;

impl Cpu {
    /// Executes a single instruction.
    ///
    /// Does nothing once the guest has exited.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by fetch, decode, execution, or the system-call dispatcher.
    pub fn step<H: HostIo + ?Sized>(&mut self, host: &mut H) -> Result<(), SimError> {
        if self.halted() {
            return Ok(());
        }

        let inst = self.fetch()?;
        let op = decode_op(inst).ok_or(SimError::IllegalInstruction { pc: self.pc, inst })?;

        if self.trace {
            trace!("{:#018x}: {:#010x}  {}", self.pc, inst, format_op(&op));
        }

        self.execute(&op, host)?;

        self.stats.retire(&op);
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        Ok(())
    }

    /// Fetches the instruction word at the current PC.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] if any byte of the word lies outside RAM.
    pub fn fetch(&self) -> Result<u32, SimError> {
        self.memory.read_u32(self.pc).ok_or(SimError::MemoryFault {
            pc: self.pc,
            addr: self.pc,
            len: INSTRUCTION_SIZE,
        })
    }

    /// Applies one decoded operation to the architectural state.
    fn execute<H: HostIo + ?Sized>(&mut self, op: &Op, host: &mut H) -> Result<(), SimError> {
        match *op {
            Op::Addi { rd, rs1, imm } => {
                let val = self.regs.read(rs1).wrapping_add(imm as u64);
                self.regs.write(rd, val);
            }
            Op::Addiw { rd, rs1, imm } => {
                let val = self.regs.read(rs1).wrapping_add(imm as u64) as i32;
                self.regs.write(rd, val as i64 as u64);
            }
            Op::Lui { rd, imm } => self.regs.write(rd, imm as u64),
            Op::Auipc { rd, imm } => self.regs.write(rd, self.pc.wrapping_add(imm as u64)),
            Op::Load { kind, rd, rs1, imm } => {
                let addr = self.regs.read(rs1).wrapping_add(imm as u64);
                let val = self.load(kind, addr)?;
                self.regs.write(rd, val);
            }
            Op::Ecall => self.handle_ecall(host)?,
        }
        Ok(())
    }

    /// Performs an integer load of `kind` at `addr`.
    fn load(&self, kind: LoadKind, addr: u64) -> Result<u64, SimError> {
        self.memory
            .read_le(addr, kind.size())
            .map(|raw| kind.extend(raw))
            .ok_or(SimError::MemoryFault {
                pc: self.pc,
                addr,
                len: kind.size(),
            })
    }
}
