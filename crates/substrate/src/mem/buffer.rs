//! DRAM buffer implementation.
//!
//! This module provides a wrapper around raw memory allocation for the
//! physical memory window. It supports lazy allocation via `mmap` on Unix
//! systems so that multi-gigabyte windows only cost host pages that are
//! actually touched.

use std::fmt;
use std::slice;

/// A raw memory buffer backing the physical memory window.
///
/// On Unix systems this uses `mmap` to allocate anonymous zeroed memory,
/// which the OS backs lazily on first touch. On other platforms it falls
/// back to a heap allocation. The buffer is owned exclusively by one
/// memory window; there is no shared access.
pub struct DramBuffer {
    ptr: *mut u8,
    size: usize,
    is_mmap: bool,
}

impl DramBuffer {
    /// Creates a new zero-initialized buffer of the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    ///
    /// # Panics
    /// Panics if the host refuses the allocation.
    pub fn new(size: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
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
                panic!("Failed to mmap DRAM buffer of size {size}");
            }

            Self {
                ptr: ptr as *mut u8,
                size,
                is_mmap: true,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; size];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                size,
                is_mmap: false,
            }
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Reports whether the buffer has zero length.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads a single byte.
    ///
    /// # Panics
    /// Panics when `offset` is outside the buffer.
    pub fn read_u8(&self, offset: usize) -> u8 {
        assert!(offset < self.size, "DRAM read out of bounds");
        unsafe { *self.ptr.add(offset) }
    }

    /// Writes a single byte.
    ///
    /// # Panics
    /// Panics when `offset` is outside the buffer.
    pub fn write_u8(&mut self, offset: usize, val: u8) {
        assert!(offset < self.size, "DRAM write out of bounds");
        unsafe {
            *self.ptr.add(offset) = val;
        }
    }

    /// Reads a fixed-width byte array, as used by the sized accessors.
    ///
    /// # Panics
    /// Panics when the window `[offset, offset + N)` is outside the buffer.
    pub fn read_array<const N: usize>(&self, offset: usize) -> [u8; N] {
        assert!(offset + N <= self.size, "DRAM read out of bounds");
        let mut out = [0u8; N];
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr.add(offset), out.as_mut_ptr(), N);
        }
        out
    }

    /// Borrows a slice of the buffer.
    ///
    /// # Panics
    /// Panics when the window is outside the buffer.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        assert!(offset + len <= self.size, "DRAM read out of bounds");
        unsafe { slice::from_raw_parts(self.ptr.add(offset), len) }
    }

    /// Copies `data` into the buffer at `offset`.
    ///
    /// # Panics
    /// Panics when the destination window is outside the buffer.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        assert!(offset + data.len() <= self.size, "DRAM write out of bounds");
        unsafe {
            let dest = self.ptr.add(offset);
            std::ptr::copy_nonoverlapping(data.as_ptr(), dest, data.len());
        }
    }
}

impl Drop for DramBuffer {
    /// Deallocates the buffer.
    ///
    /// On Unix systems, unmaps the mmap'd memory. On other systems,
    /// reconstructs the Vec to trigger its destructor.
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            unsafe {
                let _ = libc::munmap(self.ptr as *mut _, self.size);
            }
        } else {
            #[cfg(not(unix))]
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.size, self.size);
            }
        }
    }
}

impl fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DramBuffer")
            .field("size", &self.size)
            .field("is_mmap", &self.is_mmap)
            .finish_non_exhaustive()
    }
}
