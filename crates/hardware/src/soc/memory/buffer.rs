//! DRAM Buffer Implementation.
//!
//! This module provides a safe wrapper around the raw allocation backing guest RAM.
//! On Unix systems it maps anonymous memory with `mmap`, so pages are only
//! materialised by the OS when the guest touches them and large RAM sizes cost
//! nothing at startup. Other platforms fall back to a zeroed heap allocation.

use std::fmt;
use std::io;
use std::slice;

/// Zero-initialised backing storage for guest RAM.
pub struct DramBuffer {
    ptr: *mut u8,
    size: usize,
    is_mmap: bool,
}

impl DramBuffer {
    /// Creates a new zero-filled buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the anonymous mapping cannot be created (for
    /// example when `size` is zero or exceeds the host's address space).
    pub fn new(size: usize) -> io::Result<Self> {
        #[cfg(unix)]
        {
            use std::ptr;
            // SAFETY: an anonymous private mapping with no fixed address has no
            // preconditions; failure is reported through MAP_FAILED.
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            if ptr == libc::MAP_FAILED {
                return Err(io::Error::last_os_error());
            }

            Ok(Self {
                ptr: ptr.cast::<u8>(),
                size,
                is_mmap: true,
            })
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; size];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Ok(Self {
                ptr,
                size,
                is_mmap: false,
            })
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Views the whole buffer as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `size` initialised bytes for the lifetime of
        // `self` (anonymous mappings and `vec!` are zero-filled), and shared access
        // is tied to `&self`.
        unsafe { slice::from_raw_parts(self.ptr, self.size) }
    }

    /// Views the whole buffer as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr, self.size) }
    }
}

impl fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DramBuffer")
            .field("size", &self.size)
            .field("is_mmap", &self.is_mmap)
            .finish()
    }
}

impl Drop for DramBuffer {
    /// Deallocates the DRAM buffer.
    ///
    /// On Unix systems, unmaps the mmap'd memory. On other systems,
    /// reconstructs the Vec to trigger its destructor.
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            // SAFETY: `ptr`/`size` describe exactly the mapping created in `new`,
            // and no slice borrowed from it can outlive `self`.
            unsafe {
                let _ = libc::munmap(self.ptr.cast::<libc::c_void>(), self.size);
            }
        } else {
            #[cfg(not(unix))]
            // SAFETY: `ptr`/`size` came from a `Vec<u8>` of length and capacity
            // `size` that was forgotten in `new`.
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.size, self.size);
            }
        }
    }
}
