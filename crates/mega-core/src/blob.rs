//! Cursor over the little-endian legacy resource blobs.
//!
//! The floor-grid and walk-data resources are flat length-prefixed records
//! with no framing or checksums; all a parser needs is bounds-checked
//! little-endian reads that fail loudly on truncation.

use crate::{MegaError, MegaResult};

/// A bounds-checked little-endian reader over a byte slice.
pub struct BlobReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BlobReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        BlobReader { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> MegaResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(MegaError::Truncated {
                need: n - self.remaining(),
                at:   self.pos,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u16(&mut self) -> MegaResult<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> MegaResult<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i32(&mut self) -> MegaResult<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
