//! Memory Buffer Implementation.
//!
//! This module provides the zero-initialised byte storage behind [`Memory`](super::Memory).
//! All accessors are range-checked and return `None` instead of panicking, so the
//! caller can turn an out-of-range access into a fault.

use std::ops::Range;

/// Fixed-size, zero-initialised byte buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DramBuffer {
    bytes: Box<[u8]>,
}

impl DramBuffer {
    /// Creates a zeroed buffer of the specified size.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Converts a possibly negative start address and a length into an in-bounds range.
    fn range(&self, offset: i64, len: usize) -> Option<Range<usize>> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(len)?;
        (end <= self.bytes.len()).then_some(start..end)
    }

    /// Borrows `len` bytes starting at `offset`, or `None` if any byte is out of range.
    pub fn read_slice(&self, offset: i64, len: usize) -> Option<&[u8]> {
        let range = self.range(offset, len)?;
        self.bytes.get(range)
    }

    /// Copies `data` to `offset`. Nothing is written unless every byte is in range.
    pub fn write_slice(&mut self, offset: i64, data: &[u8]) -> Option<()> {
        let range = self.range(offset, data.len())?;
        self.bytes.get_mut(range)?.copy_from_slice(data);
        Some(())
    }

    /// Borrows every byte from `offset` to the end of the buffer.
    pub fn tail(&self, offset: i64) -> Option<&[u8]> {
        let start = usize::try_from(offset).ok()?;
        self.bytes.get(start..)
    }
}
