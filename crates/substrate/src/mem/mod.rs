//! Physical memory substrate.
//!
//! This module implements the flat memory window behind the model ABI. It
//! includes:
//! 1. **Buffer:** Raw backing storage with lazy host allocation.
//! 2. **Window:** A byte-addressed range `[base, base + len)` with every
//!    access bounds-checked against it.
//! 3. **Sized Access:** Little-endian accessors at 8, 16, 32, and 64 bits.
//!
//! Accesses are not required to be naturally aligned: this layer is a raw
//! accessor and alignment fault semantics, if any, belong to the model.

/// Raw DRAM buffer implementation.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::data::{AccessType, MarchBits};
use crate::common::error::MemFault;

/// Flat physical memory mapped at a base address.
///
/// All multi-byte accesses are little-endian. An access that falls outside
/// the mapped range, even partially, is reported as a [`MemFault`] instead
/// of wrapping, clamping, or silently succeeding.
#[derive(Debug)]
pub struct Memory {
    buffer: DramBuffer,
    base: MarchBits,
}

impl Memory {
    /// Creates a zero-initialized memory window of `size` bytes at `base`.
    pub fn new(base: MarchBits, size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
            base,
        }
    }

    /// Returns the base physical address of the mapped range.
    pub const fn base(&self) -> MarchBits {
        self.base
    }

    /// Returns the size of the mapped range in bytes.
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Reports whether the mapped range is empty.
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Reports whether the `len`-byte window at `address` lies entirely
    /// inside the mapped range.
    pub fn contains(&self, address: MarchBits, len: u64) -> bool {
        address
            .checked_sub(self.base)
            .and_then(|offset| offset.checked_add(len))
            .is_some_and(|end| end <= self.buffer.len() as u64)
    }

    /// Translates `address` into a buffer offset for a `width`-byte access.
    fn offset(&self, address: MarchBits, width: u8, access: AccessType) -> Result<usize, MemFault> {
        let fault = MemFault {
            access,
            width,
            address,
        };
        let offset = address.checked_sub(self.base).ok_or(fault)?;
        let end = offset.checked_add(MarchBits::from(width)).ok_or(fault)?;
        if end > self.buffer.len() as u64 {
            return Err(fault);
        }
        Ok(offset as usize)
    }

    /// Reads one byte.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when `address` is outside the mapped range.
    pub fn read_u8(&self, address: MarchBits) -> Result<u8, MemFault> {
        let offset = self.offset(address, 1, AccessType::Read)?;
        Ok(self.buffer.read_u8(offset))
    }

    /// Reads two bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte is outside the mapped range.
    pub fn read_u16(&self, address: MarchBits) -> Result<u16, MemFault> {
        let offset = self.offset(address, 2, AccessType::Read)?;
        Ok(u16::from_le_bytes(self.buffer.read_array(offset)))
    }

    /// Reads four bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte is outside the mapped range.
    pub fn read_u32(&self, address: MarchBits) -> Result<u32, MemFault> {
        let offset = self.offset(address, 4, AccessType::Read)?;
        Ok(u32::from_le_bytes(self.buffer.read_array(offset)))
    }

    /// Reads eight bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte is outside the mapped range.
    pub fn read_u64(&self, address: MarchBits) -> Result<u64, MemFault> {
        let offset = self.offset(address, 8, AccessType::Read)?;
        Ok(u64::from_le_bytes(self.buffer.read_array(offset)))
    }

    /// Reads the 32-bit instruction encoding at `address`.
    ///
    /// Identical to [`read_u32`](Memory::read_u32) except the fault record
    /// classifies the access as a fetch.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte is outside the mapped range.
    pub fn fetch_u32(&self, address: MarchBits) -> Result<u32, MemFault> {
        let offset = self.offset(address, 4, AccessType::Fetch)?;
        Ok(u32::from_le_bytes(self.buffer.read_array(offset)))
    }

    /// Writes one byte.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when `address` is outside the mapped range;
    /// nothing is written.
    pub fn write_u8(&mut self, address: MarchBits, val: u8) -> Result<(), MemFault> {
        let offset = self.offset(address, 1, AccessType::Write)?;
        self.buffer.write_u8(offset, val);
        Ok(())
    }

    /// Writes two bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte falls outside the mapped
    /// range; nothing is written.
    pub fn write_u16(&mut self, address: MarchBits, val: u16) -> Result<(), MemFault> {
        let offset = self.offset(address, 2, AccessType::Write)?;
        self.buffer.write_slice(offset, &val.to_le_bytes());
        Ok(())
    }

    /// Writes four bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte falls outside the mapped
    /// range; nothing is written.
    pub fn write_u32(&mut self, address: MarchBits, val: u32) -> Result<(), MemFault> {
        let offset = self.offset(address, 4, AccessType::Write)?;
        self.buffer.write_slice(offset, &val.to_le_bytes());
        Ok(())
    }

    /// Writes eight bytes, little-endian.
    ///
    /// # Errors
    /// Returns a [`MemFault`] when any byte falls outside the mapped
    /// range; nothing is written.
    pub fn write_u64(&mut self, address: MarchBits, val: u64) -> Result<(), MemFault> {
        let offset = self.offset(address, 8, AccessType::Write)?;
        self.buffer.write_slice(offset, &val.to_le_bytes());
        Ok(())
    }

    /// Copies `data` into memory starting at `address`.
    ///
    /// Used when placing program images during setup; callers validate the
    /// destination with [`contains`](Memory::contains) first.
    ///
    /// # Panics
    /// Panics when the destination window is outside the mapped range.
    pub fn load_at(&mut self, address: MarchBits, data: &[u8]) {
        assert!(
            self.contains(address, data.len() as u64),
            "image of {} byte(s) at {address:#x} outside mapped memory",
            data.len()
        );
        if data.is_empty() {
            return;
        }
        let offset = (address - self.base) as usize;
        self.buffer.write_slice(offset, data);
    }
}
