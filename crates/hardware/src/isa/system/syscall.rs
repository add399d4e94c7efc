//! Host System-Call Numbers.
//!
//! Guest programs request host services by loading a call number into `a7` and
//! executing `ECALL`. The numbering follows the RISC-V Linux ABI:
//!
//! | `a7` | Call    | Arguments                              |
//! |------|---------|----------------------------------------|
//! | 64   | `write` | `a0` = fd, `a1` = buffer, `a2` = length |
//! | 93   | `exit`  | `a0` = exit code                        |

/// System call number for `write`.
pub const SYS_WRITE: u64 = 64;

/// System call number for `exit`.
pub const SYS_EXIT: u64 = 93;

/// File descriptor of standard output.
pub const STDOUT_FD: u64 = 1;

/// System calls implemented by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syscall {
    /// Copy a guest buffer to host standard output.
    Write,
    /// Terminate emulation with an exit code.
    Exit,
}

impl Syscall {
    /// Maps a call number to a supported system call, or `None` if unsupported.
    pub const fn from_number(number: u64) -> Option<Self> {
        match number {
            SYS_WRITE => Some(Self::Write),
            SYS_EXIT => Some(Self::Exit),
            _ => None,
        }
    }

    /// Returns the conventional name of this system call.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Exit => "exit",
        }
    }
}
