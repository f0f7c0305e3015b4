//! # Binary Writer
//!
//! Encodes primitive values into a `ByteSink` under a fixed `WireFormat`.
//!
//! ## Encoding
//! - `bool`, `i8`, `u8`: one raw byte in every mode
//! - 16/32/64-bit integers, fixed mode: `size_of::<T>()` bytes in target order
//! - 16/32/64-bit integers, compacted mode: one header byte, then the magnitude
//!   in the narrowest of 1, 2, 4 or 8 bytes, target order. The header holds the
//!   width; signed headers also carry the sign in bit 7.
//! - `f32`, `f64`: always fixed width, swapped through the bit pattern
//! - sequence lengths: fixed 8-byte `u64` or compacted unsigned
//!
//! Each value is handed to the sink in one `write` call. A short write aborts
//! with `CodecError::WriteFailure`; the sink's state after that is unspecified.

use super::endian::normalize;
use super::format::WireFormat;
use super::primitive::{FixedWidth, Primitive, WireInt};
use super::width::{signed_width, unsigned_width, SIGN_BIT};
use crate::error::{constants, CodecError, Result};
use crate::stream::ByteSink;
use tracing::trace;

/// Largest encoded primitive: header plus 8 payload bytes.
const MAX_ENCODED_LEN: usize = 1 + 8;

/// Writes wire values into a borrowed sink.
#[derive(Debug)]
pub struct BinaryWriter<'a, S: ?Sized> {
    sink: &'a mut S,
    format: WireFormat,
}

impl<'a, S: ByteSink + ?Sized> BinaryWriter<'a, S> {
    pub fn new(sink: &'a mut S, format: WireFormat) -> Self {
        Self { sink, format }
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut *self.sink
    }

    /// Copy `bytes` to the sink verbatim.
    ///
    /// # Errors
    /// `CodecError::WriteFailure` if the sink accepts fewer bytes.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let written = self.sink.write(bytes);
        if written != bytes.len() {
            trace!(
                expected = bytes.len(),
                written,
                "{}",
                constants::ERR_WRITE_FAILURE
            );
            return Err(CodecError::WriteFailure {
                expected: bytes.len(),
                written,
            });
        }
        Ok(())
    }

    /// Encode any primitive.
    #[inline]
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<()> {
        value.write_to(self)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_raw(&[u8::from(value)])
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_raw(&[value])
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_raw(&value.to_ne_bytes())
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_int(value)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_int(value)
    }

    /// Floats are never compacted.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_fixed(value)
    }

    /// Write a sequence length prefix.
    pub fn write_seq_size(&mut self, len: u64) -> Result<()> {
        if self.format.compacted {
            self.write_compacted(len)
        } else {
            self.write_fixed(len)
        }
    }

    /// Length prefix followed by every element.
    pub fn write_slice<T: Primitive>(&mut self, values: &[T]) -> Result<()> {
        self.write_seq_size(values.len() as u64)?;
        for &value in values {
            value.write_to(self)?;
        }
        Ok(())
    }

    /// Length prefix followed by the raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_seq_size(bytes.len() as u64)?;
        self.write_raw(bytes)
    }

    /// Length prefix followed by the UTF-8 bytes of `value`.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    fn write_int<T: WireInt>(&mut self, value: T) -> Result<()> {
        if self.format.compacted {
            self.write_compacted(value)
        } else {
            self.write_fixed(value)
        }
    }

    fn write_fixed<T: FixedWidth>(&mut self, value: T) -> Result<()> {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        normalize(value, self.format).write_ne(&mut buf[..T::SIZE]);
        self.write_raw(&buf[..T::SIZE])
    }

    fn write_compacted<T: WireInt>(&mut self, value: T) -> Result<()> {
        let (negative, magnitude) = value.sign_magnitude();
        let width = if T::SIGNED {
            signed_width(negative, magnitude)?
        } else {
            unsigned_width(magnitude)
        };

        let mut buf = [0u8; MAX_ENCODED_LEN];
        buf[0] = if negative { width | SIGN_BIT } else { width };

        let len = 1 + usize::from(width);
        let payload = &mut buf[1..len];
        match width {
            1 => payload[0] = magnitude as u8,
            2 => normalize(magnitude as u16, self.format).write_ne(payload),
            4 => normalize(magnitude as u32, self.format).write_ne(payload),
            8 => normalize(magnitude, self.format).write_ne(payload),
            other => return Err(CodecError::InvalidEncodedWidth(other)),
        }

        self.write_raw(&buf[..len])
    }
}
