//! # Primitive Types
//!
//! Static dispatch for every value the codec can carry. `Primitive` is sealed
//! and implemented once per concrete type: `bool`, `i8`/`u8`, the 16/32/64-bit
//! integers, `f32` and `f64`. `BinaryReader::read::<T>()` and
//! `BinaryWriter::write(value)` route through it to the per-type operations.
//!
//! The crate-internal `FixedWidth` and `WireInt` traits give the reader and
//! writer native byte access and sign handling without naming each type.

use super::endian::Endian;
use super::reader::BinaryReader;
use super::writer::BinaryWriter;
use crate::error::Result;
use crate::stream::{ByteSink, ByteSource};

mod sealed {
    pub trait Sealed {}
}

/// A value with a defined wire encoding.
pub trait Primitive: Copy + sealed::Sealed {
    /// Encoded size in fixed-width mode.
    const FIXED_SIZE: usize;

    /// Encode `self` through the writer.
    fn write_to<S: ByteSink + ?Sized>(self, writer: &mut BinaryWriter<'_, S>) -> Result<()>;

    /// Decode a value through the reader.
    fn read_from<S: ByteSource + ?Sized>(reader: &mut BinaryReader<'_, S>) -> Result<Self>;
}

macro_rules! impl_primitive {
    ($($t:ty => $write:ident, $read:ident;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const FIXED_SIZE: usize = std::mem::size_of::<$t>();

            #[inline]
            fn write_to<S: ByteSink + ?Sized>(self, writer: &mut BinaryWriter<'_, S>) -> Result<()> {
                writer.$write(self)
            }

            #[inline]
            fn read_from<S: ByteSource + ?Sized>(reader: &mut BinaryReader<'_, S>) -> Result<Self> {
                reader.$read()
            }
        }
    )*};
}

impl_primitive! {
    bool => write_bool, read_bool;
    i8 => write_i8, read_i8;
    u8 => write_u8, read_u8;
    i16 => write_i16, read_i16;
    u16 => write_u16, read_u16;
    i32 => write_i32, read_i32;
    u32 => write_u32, read_u32;
    i64 => write_i64, read_i64;
    u64 => write_u64, read_u64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
}

/// Multi-byte number with native-order byte access.
pub(crate) trait FixedWidth: Endian {
    const SIZE: usize;

    /// Store native bytes into `out`, which is exactly `SIZE` long.
    fn write_ne(self, out: &mut [u8]);

    /// Load from exactly `SIZE` native bytes.
    fn read_ne(bytes: &[u8]) -> Self;
}

/// Integer that may be compacted.
pub(crate) trait WireInt: FixedWidth {
    const SIGNED: bool;

    /// Split into (negative, magnitude).
    fn sign_magnitude(self) -> (bool, u64);

    /// Two's complement negation; wraps for the minimum value.
    fn negate(self) -> Self;
}

macro_rules! impl_fixed_width {
    ($($t:ty)*) => {$(
        impl FixedWidth for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            #[inline]
            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }
        }
    )*};
}

impl_fixed_width! { u16 i16 u32 i32 u64 i64 f32 f64 }

macro_rules! impl_wire_int_signed {
    ($($t:ty)*) => {$(
        impl WireInt for $t {
            const SIGNED: bool = true;

            #[inline]
            fn sign_magnitude(self) -> (bool, u64) {
                (self < 0, u64::from(self.unsigned_abs()))
            }

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*};
}

macro_rules! impl_wire_int_unsigned {
    ($($t:ty)*) => {$(
        impl WireInt for $t {
            const SIGNED: bool = false;

            #[inline]
            fn sign_magnitude(self) -> (bool, u64) {
                (false, u64::from(self))
            }

            #[inline]
            fn negate(self) -> Self {
                self
            }
        }
    )*};
}

impl_wire_int_signed! { i16 i32 i64 }
impl_wire_int_unsigned! { u16 u32 u64 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(<bool as Primitive>::FIXED_SIZE, 1);
        assert_eq!(<u16 as Primitive>::FIXED_SIZE, 2);
        assert_eq!(<f32 as Primitive>::FIXED_SIZE, 4);
        assert_eq!(<i64 as Primitive>::FIXED_SIZE, 8);
    }

    #[test]
    fn test_sign_magnitude() {
        assert_eq!((-5i16).sign_magnitude(), (true, 5));
        assert_eq!(300u32.sign_magnitude(), (false, 300));
        assert_eq!(i64::MIN.sign_magnitude(), (true, 1 << 63));
        assert_eq!(i16::MIN.sign_magnitude().1, 32_768);
    }

    #[test]
    fn test_native_bytes_roundtrip() {
        let mut out = [0u8; 4];
        0xAABB_CCDDu32.write_ne(&mut out);
        assert_eq!(out, 0xAABB_CCDDu32.to_ne_bytes());
        assert_eq!(u32::read_ne(&out), 0xAABB_CCDD);
    }
}
