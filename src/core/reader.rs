//! # Binary Reader
//!
//! Decodes primitive values from a `ByteSource`, mirroring `BinaryWriter`
//! exactly under the same `WireFormat`.
//!
//! ## Compacted integers
//! The header byte gives the payload width (and, for signed types, the sign in
//! bit 7). The payload is read into the low-address bytes of a zero-filled
//! buffer of the full type width, and the whole buffer is then normalized.
//! This placement is part of the wire format and is kept as is. For
//! little-endian formats, and whenever the payload is as wide as the type, it
//! recovers the written value. A narrower big-endian payload decodes as the
//! most significant bytes of the field: `[0x02, 0x01, 0x2C]` read as `u32` is
//! `0x012C_0000`.
//!
//! Widths outside {1, 2, 4, 8}, or wider than the target type, fail with
//! `CodecError::InvalidEncodedWidth`. A source that runs dry fails with
//! `CodecError::ReadUnderrun` and no partial value is returned.

use super::endian::normalize;
use super::format::WireFormat;
use super::primitive::{FixedWidth, Primitive, WireInt};
use super::width::{is_valid_width, SIGNED_WIDTH_MASK, SIGN_BIT};
use crate::config::{CodecConfig, LimitsConfig, MAX_SEQUENCE_LEN};
use crate::error::{constants, CodecError, Result};
use crate::stream::ByteSource;
use tracing::trace;

/// Upper bound on elements reserved up front by `read_vec`.
const PREALLOC_LIMIT: usize = 4096;

/// Largest slice `read_bytes` asks the source for at once.
const READ_CHUNK: usize = 64 * 1024;

/// Reads wire values from a borrowed source.
#[derive(Debug)]
pub struct BinaryReader<'a, S: ?Sized> {
    source: &'a mut S,
    format: WireFormat,
    max_sequence_len: u64,
}

impl<'a, S: ByteSource + ?Sized> BinaryReader<'a, S> {
    pub fn new(source: &'a mut S, format: WireFormat) -> Self {
        Self {
            source,
            format,
            max_sequence_len: MAX_SEQUENCE_LEN,
        }
    }

    /// Reader with the wire format and limits of a loaded configuration.
    pub fn from_config(source: &'a mut S, config: &CodecConfig) -> Self {
        Self::new(source, config.wire_format()).with_limits(&config.limits)
    }

    /// Cap the length accepted by `read_vec`, `read_bytes` and `read_string`.
    pub fn with_max_sequence_len(mut self, max: u64) -> Self {
        self.max_sequence_len = max;
        self
    }

    /// Apply the sequence limit of `limits`.
    pub fn with_limits(self, limits: &LimitsConfig) -> Self {
        self.with_max_sequence_len(limits.max_sequence_len)
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn max_sequence_len(&self) -> u64 {
        self.max_sequence_len
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut *self.source
    }

    /// Fill `buf` from the source.
    ///
    /// # Errors
    /// `CodecError::ReadUnderrun` if the source delivers fewer bytes.
    pub fn read_raw(&mut self, buf: &mut [u8]) -> Result<()> {
        let read = self.source.read(buf);
        if read != buf.len() {
            trace!(
                expected = buf.len(),
                read,
                "{}",
                constants::ERR_READ_UNDERRUN
            );
            return Err(CodecError::ReadUnderrun {
                expected: buf.len(),
                read,
            });
        }
        Ok(())
    }

    /// Decode any primitive.
    #[inline]
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        T::read_from(self)
    }

    /// Any non-zero byte decodes as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_raw(&mut byte)?;
        Ok(byte[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let mut byte = [0u8; 1];
        self.read_raw(&mut byte)?;
        Ok(i8::from_ne_bytes(byte))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_int()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_int()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_int()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_int()
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_int()
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_int()
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_fixed()
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_fixed()
    }

    /// Read a sequence length prefix.
    pub fn read_seq_size(&mut self) -> Result<u64> {
        if self.format.compacted {
            self.read_compacted()
        } else {
            self.read_fixed()
        }
    }

    /// Length prefix followed by that many elements.
    pub fn read_vec<T: Primitive>(&mut self) -> Result<Vec<T>> {
        let len = self.read_checked_len()?;
        let mut values = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            values.push(T::read_from(self)?);
        }
        Ok(values)
    }

    /// Length prefix followed by that many raw bytes.
    ///
    /// The buffer grows as data arrives, so a large prefix over a short
    /// source fails without allocating the full length.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_checked_len()?;
        let mut bytes = Vec::with_capacity(len.min(READ_CHUNK));
        while bytes.len() < len {
            let start = bytes.len();
            let want = (len - start).min(READ_CHUNK);
            bytes.resize(start + want, 0);
            let read = self.source.read(&mut bytes[start..]);
            if read != want {
                trace!(
                    expected = len,
                    read = start + read,
                    "{}",
                    constants::ERR_READ_UNDERRUN
                );
                return Err(CodecError::ReadUnderrun {
                    expected: len,
                    read: start + read,
                });
            }
        }
        Ok(bytes)
    }

    /// Length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        Ok(String::from_utf8(bytes)?)
    }

    fn read_checked_len(&mut self) -> Result<usize> {
        let len = self.read_seq_size()?;
        match usize::try_from(len) {
            Ok(n) if len <= self.max_sequence_len => Ok(n),
            _ => {
                trace!(
                    len,
                    max = self.max_sequence_len,
                    "{}",
                    constants::ERR_SEQUENCE_TOO_LONG
                );
                Err(CodecError::SequenceTooLong {
                    len,
                    max: self.max_sequence_len,
                })
            }
        }
    }

    fn read_int<T: WireInt>(&mut self) -> Result<T> {
        if self.format.compacted {
            self.read_compacted()
        } else {
            self.read_fixed()
        }
    }

    fn read_fixed<T: FixedWidth>(&mut self) -> Result<T> {
        let mut buf = [0u8; 8];
        self.read_raw(&mut buf[..T::SIZE])?;
        Ok(normalize(T::read_ne(&buf[..T::SIZE]), self.format))
    }

    fn read_compacted<T: WireInt>(&mut self) -> Result<T> {
        let header = self.read_u8()?;
        let (negative, width) = if T::SIGNED {
            (header & SIGN_BIT != 0, header & SIGNED_WIDTH_MASK)
        } else {
            (false, header)
        };

        let len = usize::from(width);
        if !is_valid_width(width) || len > T::SIZE {
            trace!(
                header,
                width,
                size = T::SIZE,
                "{}",
                constants::ERR_INVALID_WIDTH
            );
            return Err(CodecError::InvalidEncodedWidth(width));
        }

        let mut buf = [0u8; 8];
        self.read_raw(&mut buf[..len])?;

        let value = normalize(T::read_ne(&buf[..T::SIZE]), self.format);
        Ok(if negative { value.negate() } else { value })
    }
}
