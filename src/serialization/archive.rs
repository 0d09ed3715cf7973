//! Sequential byte cursor over an immutable blob
//!
//! A [`BinaryArchive`] pairs a borrowed byte buffer with a forward-only
//! offset. Every read either consumes exactly the bytes it returns or
//! fails leaving the offset untouched — a failed read never half-consumes
//! the buffer.

use alloc::vec::Vec;

use super::varint::decode_varint;
use crate::types::errors::{WireError, WireResult};

/// Read cursor over an immutable byte buffer
#[derive(Debug)]
pub struct BinaryArchive<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryArchive<'a> {
    /// Create a cursor at the start of `buffer`
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Current offset into the buffer
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left unread
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// True iff every byte of the buffer has been consumed
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.offset == self.buffer.len()
    }

    /// Consume exactly `count` bytes, or fail without moving the offset.
    fn take(&mut self, count: usize) -> WireResult<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < count {
            return Err(WireError::UnexpectedEndOfData {
                requested: count,
                remaining,
            });
        }

        let buffer = self.buffer;
        let start = self.offset;
        self.offset += count;
        Ok(&buffer[start..start + count])
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian u16
    pub fn read_u16(&mut self) -> WireResult<u16> {
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(self.take(2)?);
        Ok(u16::from_le_bytes(bytes))
    }

    /// Read a little-endian u32
    pub fn read_u32(&mut self) -> WireResult<u32> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a little-endian u64
    pub fn read_u64(&mut self) -> WireResult<u64> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(bytes))
    }

    /// Read a varint
    pub fn read_varint(&mut self) -> WireResult<u64> {
        let (value, consumed) = decode_varint(&self.buffer[self.offset..])?;
        self.offset += consumed;
        Ok(value)
    }

    /// Read `count` raw bytes as a borrowed view
    pub fn read_blob(&mut self, count: usize) -> WireResult<&'a [u8]> {
        self.take(count)
    }

    /// Read a varint-length-prefixed byte string (no terminator).
    ///
    /// The bytes are returned as-is; the wire format imposes no character
    /// encoding on them. On failure the offset is restored to where it was
    /// before the length prefix.
    pub fn read_string(&mut self) -> WireResult<Vec<u8>> {
        let start = self.offset;
        self.read_string_inner().map_err(|err| {
            self.offset = start;
            err
        })
    }

    fn read_string_inner(&mut self) -> WireResult<Vec<u8>> {
        let declared = self.read_varint()?;
        let length =
            usize::try_from(declared).map_err(|_| WireError::ArrayTooLarge { declared })?;
        Ok(self.take(length)?.to_vec())
    }
}
