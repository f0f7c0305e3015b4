//! # Width Selector
//!
//! Picks the smallest payload width in {1, 2, 4, 8} bytes for a compacted
//! integer. Unsigned values are compared against unsigned maxima. Signed
//! magnitudes are compared against the range of the signed type of each
//! width: up to `2^(8w-1) - 1` when positive, up to `2^(8w-1)` when negative.
//! So 127 and -128 take one byte, 128 and -129 take two.

use crate::error::{CodecError, Result};
use tracing::trace;

/// Widths a compacted header may carry.
pub const VALID_WIDTHS: [u8; 4] = [1, 2, 4, 8];

/// Mask selecting the width bits of a signed header.
pub const SIGNED_WIDTH_MASK: u8 = 0x7F;

/// Sign flag of a signed header.
pub const SIGN_BIT: u8 = 0x80;

/// Smallest width holding `value` as an unsigned integer.
#[inline]
pub const fn unsigned_width(value: u64) -> u8 {
    if value <= u8::MAX as u64 {
        1
    } else if value <= u16::MAX as u64 {
        2
    } else if value <= u32::MAX as u64 {
        4
    } else {
        8
    }
}

/// Smallest width whose signed range holds the value with this sign and magnitude.
///
/// # Errors
/// Returns `CodecError::UnrepresentableMagnitude` when no 64-bit signed value
/// has this magnitude.
#[inline]
pub fn signed_width(negative: bool, magnitude: u64) -> Result<u8> {
    // Negative values reach one further than positive ones.
    let slack = u64::from(negative);
    for width in VALID_WIDTHS {
        let limit = (1u64 << (8 * u32::from(width) - 1)) - 1 + slack;
        if magnitude <= limit {
            return Ok(width);
        }
    }
    trace!(negative, magnitude, "signed magnitude exceeds 64-bit range");
    Err(CodecError::UnrepresentableMagnitude(magnitude))
}

/// Whether `width` is one of the encodable widths.
#[inline]
pub const fn is_valid_width(width: u8) -> bool {
    matches!(width, 1 | 2 | 4 | 8)
}
