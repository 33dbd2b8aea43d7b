//! System Memory.
//!
//! This module implements the byte-addressable memory of the machine. It provides:
//! 1. **Buffer:** Zero-initialised backing storage ([`DramBuffer`]).
//! 2. **Checked Access:** Big-endian byte, halfword, and word accessors that fail with
//!    [`Trap::MemoryFault`] instead of touching bytes outside the image.
//!
//! Addresses are taken as `i64` so that effective addresses (`base + offset`) can be
//! formed without 32-bit wraparound; a negative address is simply out of range.

/// Byte storage for the memory image.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::{AccessType, Trap};

/// Byte-addressable big-endian memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: DramBuffer,
}

impl Memory {
    /// Creates a zeroed memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
        }
    }

    /// Returns the capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn fault(&self, access: AccessType, addr: i64, size: u32) -> Trap {
        Trap::MemoryFault {
            access,
            addr,
            size,
            capacity: self.capacity(),
        }
    }

    /// Reads `N` bytes at `addr`.
    fn read_array<const N: usize>(&self, addr: i64, access: AccessType) -> Result<[u8; N], Trap> {
        self.buffer
            .read_slice(addr, N)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| self.fault(access, addr, N as u32))
    }

    /// Reads one byte.
    pub fn read_u8(&self, addr: i64, access: AccessType) -> Result<u8, Trap> {
        let [byte] = self.read_array::<1>(addr, access)?;
        Ok(byte)
    }

    /// Reads a big-endian halfword.
    pub fn read_u16(&self, addr: i64, access: AccessType) -> Result<u16, Trap> {
        self.read_array(addr, access).map(u16::from_be_bytes)
    }

    /// Reads a big-endian word.
    pub fn read_u32(&self, addr: i64, access: AccessType) -> Result<u32, Trap> {
        self.read_array(addr, access).map(u32::from_be_bytes)
    }

    /// Writes a big-endian word. On fault no byte is modified.
    pub fn write_u32(&mut self, addr: i64, val: u32) -> Result<(), Trap> {
        self.write_bytes(addr, &val.to_be_bytes())
    }

    /// Writes a byte slice starting at `addr`. On fault no byte is modified.
    pub fn write_bytes(&mut self, addr: i64, data: &[u8]) -> Result<(), Trap> {
        self.buffer
            .write_slice(addr, data)
            .ok_or_else(|| self.fault(AccessType::Write, addr, data.len() as u32))
    }

    /// Reads the NUL-terminated byte string starting at `addr`, without the terminator.
    ///
    /// A string with no terminator before the end of memory faults at the first byte
    /// past the end.
    pub fn read_cstr(&self, addr: i64) -> Result<&[u8], Trap> {
        let tail = self
            .buffer
            .tail(addr)
            .ok_or_else(|| self.fault(AccessType::Read, addr, 1))?;
        match tail.iter().position(|&b| b == 0) {
            Some(len) => Ok(&tail[..len]),
            None => Err(self.fault(AccessType::Read, addr + tail.len() as i64, 1)),
        }
    }
}
