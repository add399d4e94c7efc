//! System-Call Dispatch.
//!
//! `ECALL` transfers control to the host. The dispatcher reads the call number from
//! `a7`, performs the matching host-visible effect, and returns to the execution loop:
//! 1. **`write` (64):** Copies `a2` bytes at guest address `a1` to the host console and
//!    returns the byte count in `a0`. The descriptor in `a0` is not interpreted.
//! 2. **`exit` (93):** Latches `a0` as the exit code, halting the CPU.
//! 3. **Anything else:** Fatal `UnsupportedSyscall`.

use tracing::{debug, warn};

use super::Cpu;
use crate::common::SimError;
use crate::isa::abi;
use crate::isa::system::syscall::{STDOUT_FD, Syscall};
use crate::soc::HostIo;

impl Cpu {
    /// Services the `ECALL` at the current PC.
    ///
    /// # Errors
    ///
    /// [`SimError::UnsupportedSyscall`] for unknown call numbers, [`SimError::MemoryFault`]
    /// if a `write` buffer leaves RAM, and [`SimError::Io`] if the host write fails.
    pub fn handle_ecall<H: HostIo + ?Sized>(&mut self, host: &mut H) -> Result<(), SimError> {
        let number = self.regs.read(abi::REG_A7);
        let call = Syscall::from_number(number).ok_or(SimError::UnsupportedSyscall {
            pc: self.pc,
            number,
        })?;
        debug!("ecall {} ({}) at {:#x}", call.name(), number, self.pc);

        match call {
            Syscall::Write => self.sys_write(host)?,
            Syscall::Exit => self.sys_exit(),
        }
        self.stats.syscalls += 1;
        Ok(())
    }

    /// `write(fd, buf, len)`: the whole range is checked before any byte is emitted.
    fn sys_write<H: HostIo + ?Sized>(&mut self, host: &mut H) -> Result<(), SimError> {
        let fd = self.regs.read(abi::REG_A0);
        let addr = self.regs.read(abi::REG_A1);
        let len = self.regs.read(abi::REG_A2);

        if fd != STDOUT_FD {
            warn!("write to fd {} is not supported; sending it to the console", fd);
        }

        let data = self.memory.slice(addr, len).ok_or(SimError::MemoryFault {
            pc: self.pc,
            addr,
            len,
        })?;
        host.write(fd, data)?;

        self.stats.bytes_written += len;
        self.regs.write(abi::REG_A0, len);
        Ok(())
    }

    /// `exit(code)`.
    fn sys_exit(&mut self) {
        debug!("guest exit with code {}", self.regs.read_signed(abi::REG_A0));
        self.exit_code = Some(self.regs.read(abi::REG_A0));
    }
}
