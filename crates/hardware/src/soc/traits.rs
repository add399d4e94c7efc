//! Host I/O trait for system-call side effects.
//!
//! This module defines the `HostIo` trait through which the system-call dispatcher
//! reaches the outside world. Keeping the effect behind a trait lets the CLI stream
//! guest output to the terminal while tests and embedders capture it in memory.

use std::io;

/// Destination for bytes the guest writes with the `write` system call.
pub trait HostIo {
    /// Writes `data` verbatim on behalf of the guest.
    ///
    /// `fd` is the descriptor the guest passed in `a0`. Implementations may ignore
    /// it; the dispatcher has already logged descriptors other than stdout.
    ///
    /// # Errors
    ///
    /// Any host I/O error; the dispatcher turns it into a fatal fault.
    fn write(&mut self, fd: u64, data: &[u8]) -> io::Result<()>;
}

impl<H: HostIo + ?Sized> HostIo for &mut H {
    fn write(&mut self, fd: u64, data: &[u8]) -> io::Result<()> {
        (**self).write(fd, data)
    }
}

impl<H: HostIo + ?Sized> HostIo for Box<H> {
    fn write(&mut self, fd: u64, data: &[u8]) -> io::Result<()> {
        (**self).write(fd, data)
    }
}
