//! # Endian Normalizer
//!
//! Converts fixed-width numbers between host order and the wire's configured
//! order. The swap happens only when the configured order differs from the
//! host; the decision depends on the descriptor, never on the data.
//!
//! Floating-point values are swapped through their bit pattern (`to_bits` /
//! `from_bits`), so NaN payloads and signed zeros survive untouched.

use super::format::WireFormat;

/// A fixed-width numeric type whose bytes can be reversed.
pub trait Endian: Copy {
    /// Reverse the byte order of the value.
    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_endian_int {
    ($($t:ty)*) => {$(
        impl Endian for $t {
            #[inline]
            fn reverse_bytes(self) -> Self {
                self.swap_bytes()
            }
        }
    )*};
}

impl_endian_int! { u8 i8 u16 i16 u32 i32 u64 i64 }

impl Endian for f32 {
    #[inline]
    fn reverse_bytes(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl Endian for f64 {
    #[inline]
    fn reverse_bytes(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Whether values must be byte-swapped for this format on this host.
#[inline]
pub const fn needs_swap(format: WireFormat) -> bool {
    !format.byte_order.is_native()
}

/// Convert between host order and the format's order.
///
/// The operation is its own inverse, so it serves both the read and write paths.
#[inline]
pub fn normalize<T: Endian>(value: T, format: WireFormat) -> T {
    if needs_swap(format) {
        value.reverse_bytes()
    } else {
        value
    }
}
