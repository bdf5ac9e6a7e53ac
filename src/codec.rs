//! Byte-level codec primitives for the Parlay wire format.
//!
//! Everything the program exchanges is little-endian with no padding or
//! alignment: fixed-width scalars, fixed-size byte blocks, and `u32`
//! count-prefixed sequences. [`ByteReader`] and [`ByteWriter`] are the only
//! places raw bytes are touched; record codecs compose them field by field.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("insufficient bytes: needed {needed}, {remaining} remaining")]
    InsufficientBytes { needed: usize, remaining: usize },
    #[error("unknown action discriminant {0}")]
    InvalidDiscriminant(u8),
    #[error("fixed-width field expected {expected} bytes, got {actual}")]
    InvalidFixedLength { expected: usize, actual: usize },
}

/// Cursor over an immutable byte buffer. Reads never run past the end; a
/// short buffer yields [`CodecError::InsufficientBytes`], never a partial
/// value.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::InsufficientBytes {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// One byte; any non-zero value maps to `true`.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.read_u8()? != 0)
    }

    /// `u32` byte count followed by that many raw bytes.
    pub fn read_var_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_u32()? as usize;
        Ok(self.take(len)?.to_vec())
    }

    /// `u32` element count followed by each element's encoding in order.
    pub fn read_vec<T: WireDecode>(&mut self) -> Result<Vec<T>, CodecError> {
        let count = self.read_u32()? as usize;
        // A hostile count can't be trusted for the allocation size.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }
}

/// Growable output buffer mirroring [`ByteReader`].
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    /// Fixed-width block; the supplied slice must match the declared width.
    pub fn put_fixed(&mut self, bytes: &[u8], width: usize) -> Result<(), CodecError> {
        if bytes.len() != width {
            return Err(CodecError::InvalidFixedLength {
                expected: width,
                actual: bytes.len(),
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn put_var_bytes(&mut self, bytes: &[u8]) {
        self.put_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }

    pub fn put_vec<T: WireEncode>(&mut self, items: &[T]) -> Result<(), CodecError> {
        self.put_u32(items.len() as u32);
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }
}

pub trait WireEncode {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError>;

    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut w = ByteWriter::new();
        self.encode(&mut w)?;
        Ok(w.into_bytes())
    }
}

pub trait WireDecode: Sized {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError>;

    /// Decode from the front of `bytes`. Trailing bytes are tolerated here,
    /// at the outermost call site only; account buffers are padded by the
    /// program.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::decode(&mut ByteReader::new(bytes))
    }
}
