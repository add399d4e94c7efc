//! Guest System Memory (RAM).
//!
//! This module implements the flat memory image the guest executes from. It provides:
//! 1. **Buffer:** Backing storage (`DramBuffer`) for RAM contents.
//! 2. **Memory:** The buffer mapped at a guest base address, with bounds-checked
//!    little-endian accessors. Every accessor returns `None` rather than touching
//!    bytes outside `[base, base + size)`.

/// DRAM buffer implementation (mmap or `Vec`) for raw byte storage.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::SimError;

/// Guest RAM mapped at a fixed base address.
#[derive(Debug)]
pub struct Memory {
    /// Backing storage.
    buffer: DramBuffer,
    /// The guest address where offset 0 of the buffer is mapped.
    base_addr: u64,
}

impl Memory {
    /// Creates `size` bytes of zeroed guest RAM mapped at `base_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the region is empty or wraps the
    /// address space, and [`SimError::Io`] if the host cannot allocate the buffer.
    pub fn new(base_addr: u64, size: usize) -> Result<Self, SimError> {
        if size == 0 || base_addr.checked_add(size as u64).is_none() {
            return Err(SimError::InvalidConfig(format!(
                "RAM of {size} bytes cannot be mapped at {base_addr:#x}"
            )));
        }
        Ok(Self {
            buffer: DramBuffer::new(size)?,
            base_addr,
        })
    }

    /// Returns the guest address of the first byte of RAM.
    pub const fn base(&self) -> u64 {
        self.base_addr
    }

    /// Returns the capacity of RAM in bytes.
    pub const fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the guest address one past the last byte of RAM.
    pub const fn end(&self) -> u64 {
        self.base_addr + self.buffer.len() as u64
    }

    /// Copies `data` into RAM starting at the base address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] without modifying RAM if `data` is larger
    /// than the RAM capacity.
    pub fn load(&mut self, data: &[u8]) -> Result<(), SimError> {
        let capacity = self.size();
        let dest = self
            .buffer
            .as_mut_slice()
            .get_mut(..data.len())
            .ok_or(SimError::ImageTooLarge {
                size: data.len(),
                capacity,
            })?;
        dest.copy_from_slice(data);
        Ok(())
    }

    /// Borrows `len` bytes of RAM starting at guest address `addr`.
    pub fn slice(&self, addr: u64, len: u64) -> Option<&[u8]> {
        let offset = self.offset_of(addr, len)?;
        self.buffer.as_slice().get(offset..offset + len as usize)
    }

    /// Reads a little-endian value of `size` bytes (1, 2, 4 or 8) zero-extended to 64 bits.
    pub fn read_le(&self, addr: u64, size: u64) -> Option<u64> {
        if size > 8 {
            return None;
        }
        let bytes = self.slice(addr, size)?;
        let mut raw = [0u8; 8];
        raw[..bytes.len()].copy_from_slice(bytes);
        Some(u64::from_le_bytes(raw))
    }

    /// Reads a word (32-bit) from memory (Little Endian).
    pub fn read_u32(&self, addr: u64) -> Option<u32> {
        self.read_le(addr, 4).map(|v| v as u32)
    }

    /// Translates a guest range into a buffer offset if the whole range is mapped.
    fn offset_of(&self, addr: u64, len: u64) -> Option<usize> {
        let offset = addr.checked_sub(self.base_addr)?;
        let end = offset.checked_add(len)?;
        if end <= self.size() as u64 {
            usize::try_from(offset).ok()
        } else {
            None
        }
    }
}
