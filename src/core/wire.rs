//! # Little-Endian Wire Primitives
//!
//! Bounds-checked readers and writers for the fixed-width integers that make
//! up a header. Every read and write verifies the remaining length first and
//! reports [`ProtocolError::InsufficientBuffer`] instead of panicking, so the
//! header codec can be driven directly by untrusted network input.
//!
//! Built on the `bytes` crate: `&[u8]` is a [`Buf`] and `&mut [u8]` is a
//! [`BufMut`], both of which advance in place as they are consumed.

use crate::error::{ProtocolError, Result};
use bytes::{Buf, BufMut};

/// Cursor over a borrowed input slice
#[derive(Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    start_len: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            start_len: buf.len(),
        }
    }

    /// Bytes not yet read
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Bytes read so far
    #[inline]
    pub fn consumed(&self) -> usize {
        self.start_len - self.buf.remaining()
    }

    /// Fail unless at least `needed` bytes remain
    #[inline]
    pub fn require(&self, needed: usize) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(ProtocolError::insufficient(needed, self.buf.remaining()));
        }
        Ok(())
    }

    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.require(2)?;
        Ok(self.buf.get_u16_le())
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.require(4)?;
        Ok(self.buf.get_u32_le())
    }

    #[inline]
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.require(8)?;
        Ok(self.buf.get_u64_le())
    }
}

/// Cursor over a borrowed, exclusively held output slice
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    start_len: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        let start_len = buf.len();
        Self { buf, start_len }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining_mut()
    }

    /// Bytes written so far
    #[inline]
    pub fn written(&self) -> usize {
        self.start_len - self.buf.remaining_mut()
    }

    #[inline]
    pub fn require(&self, needed: usize) -> Result<()> {
        if self.buf.remaining_mut() < needed {
            return Err(ProtocolError::insufficient(
                needed,
                self.buf.remaining_mut(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.require(2)?;
        self.buf.put_u16_le(value);
        Ok(())
    }

    #[inline]
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.require(4)?;
        self.buf.put_u32_le(value);
        Ok(())
    }

    #[inline]
    pub fn write_u64_le(&mut self, value: u64) -> Result<()> {
        self.require(8)?;
        self.buf.put_u64_le(value);
        Ok(())
    }
}
