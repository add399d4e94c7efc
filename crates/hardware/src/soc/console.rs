//! Host console implementations.
//!
//! Provides the two `HostIo` implementations shipped with the simulator:
//! 1. **`StdoutHost`:** Streams guest output to the host terminal, flushing after each call.
//! 2. **`BufferHost`:** Captures guest output in memory for tests and embedders.

use std::io::{self, Write};

use crate::soc::traits::HostIo;

/// Writes guest output to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutHost;

impl StdoutHost {
    /// Creates a console that writes to standard output.
    pub const fn new() -> Self {
        Self
    }
}

impl HostIo for StdoutHost {
    fn write(&mut self, _fd: u64, data: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(data)?;
        out.flush()
    }
}

/// Collects guest output in an in-memory buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferHost {
    out: Vec<u8>,
    writes: usize,
}

impl BufferHost {
    /// Creates an empty capture buffer.
    pub const fn new() -> Self {
        Self {
            out: Vec::new(),
            writes: 0,
        }
    }

    /// Returns every byte written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.out
    }

    /// Returns the captured output decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Returns how many `write` calls reached this host.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Consumes the host and returns the captured bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }
}

impl HostIo for BufferHost {
    fn write(&mut self, _fd: u64, data: &[u8]) -> io::Result<()> {
        self.out.extend_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}
