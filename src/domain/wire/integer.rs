//! Big-endian `u32` primitives and a bounds-checked reader

use bytes::{BufMut, Bytes};

use crate::domain::error::WireError;

/// Width of every integer on the wire
pub const U32_LEN: usize = 4;

/// Read a big-endian `u32` from the first four bytes of `buf`.
///
/// This primitive does no bounds checking of its own.
///
/// # Panics
/// Panics if `buf` holds fewer than four bytes. Decoders go through
/// [`WireReader`] instead, which checks first.
pub fn read_u32(buf: &[u8]) -> u32 {
    u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Append `value` as four big-endian bytes
pub fn write_u32<B: BufMut>(out: &mut B, value: u32) {
    out.put_u32(value);
}

/// Cursor over an untrusted buffer.
///
/// Every read is checked against the remaining length and fails with
/// [`WireError::Truncated`] rather than reading past the end.
#[derive(Debug, Clone)]
pub struct WireReader {
    buf: Bytes,
    pos: usize,
}

impl WireReader {
    pub fn new(buf: Bytes) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        if self.remaining() < needed {
            return Err(WireError::Truncated {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.ensure(U32_LEN)?;
        let value = read_u32(&self.buf[self.pos..]);
        self.pos += U32_LEN;
        Ok(value)
    }

    /// Take the next `len` bytes without copying
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, WireError> {
        self.ensure(len)?;
        let out = self.buf.slice(self.pos..self.pos + len);
        self.pos += len;
        Ok(out)
    }

    /// Advance past `len` bytes
    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }
}
