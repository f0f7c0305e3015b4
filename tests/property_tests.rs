//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated values and format descriptors.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use wire_codec::{BinaryReader, BinaryWriter, ByteOrder, CodecError, Primitive, WireFormat};

fn any_format() -> impl Strategy<Value = WireFormat> {
    (prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)], any::<bool>())
        .prop_map(|(order, compacted)| WireFormat::new(order, compacted))
}

/// Formats under which every value reads back as written.
fn lossless_format() -> impl Strategy<Value = WireFormat> {
    prop_oneof![
        Just(WireFormat::fixed(ByteOrder::Big)),
        Just(WireFormat::fixed(ByteOrder::Little)),
        Just(WireFormat::compacted(ByteOrder::Little)),
    ]
}

fn encode<T: Primitive>(value: T, format: WireFormat) -> Vec<u8> {
    let mut out = Vec::new();
    BinaryWriter::new(&mut out, format)
        .write(value)
        .expect("Encoding into a Vec should not fail");
    out
}

fn decode<T: Primitive>(bytes: &[u8], format: WireFormat) -> (T, usize) {
    let mut input = bytes;
    let value = BinaryReader::new(&mut input, format)
        .read::<T>()
        .expect("Decoding should not fail");
    (value, bytes.len() - input.len())
}

// Property: Every integer survives a roundtrip and consumes exactly what was written
proptest! {
    #[test]
    fn prop_u64_roundtrip(value in any::<u64>(), format in lossless_format()) {
        let bytes = encode(value, format);
        let (decoded, consumed) = decode::<u64>(&bytes, format);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn prop_i64_roundtrip(value in any::<i64>(), format in lossless_format()) {
        let bytes = encode(value, format);
        let (decoded, consumed) = decode::<i64>(&bytes, format);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn prop_i32_roundtrip(value in any::<i32>(), format in lossless_format()) {
        let bytes = encode(value, format);
        prop_assert_eq!(decode::<i32>(&bytes, format).0, value);
    }

    #[test]
    fn prop_u16_roundtrip(value in any::<u16>(), format in lossless_format()) {
        let bytes = encode(value, format);
        prop_assert_eq!(decode::<u16>(&bytes, format).0, value);
    }

    #[test]
    fn prop_i16_roundtrip(value in any::<i16>(), format in lossless_format()) {
        let bytes = encode(value, format);
        prop_assert_eq!(decode::<i16>(&bytes, format).0, value);
    }
}

// Property: Floats are bit-exact, including every NaN payload
proptest! {
    #[test]
    fn prop_f64_bits_roundtrip(bits in any::<u64>(), format in any_format()) {
        let value = f64::from_bits(bits);
        let bytes = encode(value, format);
        prop_assert_eq!(bytes.len(), 8);
        prop_assert_eq!(decode::<f64>(&bytes, format).0.to_bits(), bits);
    }

    #[test]
    fn prop_f32_bits_roundtrip(bits in any::<u32>(), format in any_format()) {
        let value = f32::from_bits(bits);
        let bytes = encode(value, format);
        prop_assert_eq!(bytes.len(), 4);
        prop_assert_eq!(decode::<f32>(&bytes, format).0.to_bits(), bits);
    }
}

// Property: Compacted output uses the smallest width that holds the magnitude
proptest! {
    #[test]
    fn prop_compacted_width_is_minimal(value in any::<u64>(), big in any::<bool>()) {
        let order = if big { ByteOrder::Big } else { ByteOrder::Little };
        let bytes = encode(value, WireFormat::compacted(order));
        let width = bytes[0];

        prop_assert!([1u8, 2, 4, 8].contains(&width));
        prop_assert_eq!(bytes.len(), 1 + width as usize);
        if width > 1 {
            let narrower = u32::from(width / 2) * 8;
            prop_assert!(value >> narrower != 0);
        }
    }

    #[test]
    fn prop_compacted_sign_bit_matches_sign(value in any::<i64>()) {
        let bytes = encode(value, WireFormat::compacted(ByteOrder::Little));
        prop_assert_eq!(bytes[0] & 0x80 != 0, value < 0);
    }
}

// Property: Compacted big-endian payloads read back in the high bytes of the field
proptest! {
    #[test]
    fn prop_compacted_big_fills_high_bytes(value in any::<u64>()) {
        let format = WireFormat::compacted(ByteOrder::Big);
        let bytes = encode(value, format);
        let width = u32::from(bytes[0]);

        let expected = if width == 8 { value } else { value << (8 * (8 - width)) };
        prop_assert_eq!(decode::<u64>(&bytes, format).0, expected);
    }

    #[test]
    fn prop_compacted_big_signed_fills_high_bytes(value in any::<i32>()) {
        let format = WireFormat::compacted(ByteOrder::Big);
        let bytes = encode(value, format);
        let width = u32::from(bytes[0] & 0x7F);

        let magnitude = value.unsigned_abs() << (8 * (4 - width));
        let expected = if value < 0 {
            (magnitude as i32).wrapping_neg()
        } else {
            magnitude as i32
        };
        prop_assert_eq!(decode::<i32>(&bytes, format).0, expected);
    }
}

// Property: Both byte orders carry the same bytes, reversed
proptest! {
    #[test]
    fn prop_fixed_orders_are_mirrored(value in any::<u32>()) {
        let big = encode(value, WireFormat::fixed(ByteOrder::Big));
        let mut little = encode(value, WireFormat::fixed(ByteOrder::Little));
        little.reverse();
        prop_assert_eq!(big, little);
    }
}

// Property: Sequences and strings roundtrip
proptest! {
    #[test]
    fn prop_vec_roundtrip(values in prop::collection::vec(any::<i32>(), 0..256), format in lossless_format()) {
        let mut out = Vec::new();
        BinaryWriter::new(&mut out, format).write_slice(&values).unwrap();

        let mut input = &out[..];
        let decoded = BinaryReader::new(&mut input, format).read_vec::<i32>().unwrap();
        prop_assert_eq!(decoded, values);
        prop_assert!(input.is_empty());
    }

    #[test]
    fn prop_string_roundtrip(text in ".{0,64}", format in lossless_format()) {
        let mut out = Vec::new();
        BinaryWriter::new(&mut out, format).write_str(&text).unwrap();

        let mut input = &out[..];
        let decoded = BinaryReader::new(&mut input, format).read_string().unwrap();
        prop_assert_eq!(decoded, text);
    }
}

// Property: Arbitrary input never panics, and failures are classified errors
proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..64), format in any_format()) {
        let mut input = &data[..];
        let mut reader = BinaryReader::new(&mut input, format).with_max_sequence_len(1024);
        loop {
            match reader.read_vec::<i64>() {
                Ok(_) => continue,
                Err(CodecError::ReadUnderrun { .. })
                | Err(CodecError::InvalidEncodedWidth(_))
                | Err(CodecError::SequenceTooLong { .. }) => break,
                Err(other) => prop_assert!(false, "Unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn prop_truncation_is_underrun(value in any::<i64>(), format in any_format(), cut in 0usize..9) {
        let bytes = encode(value, format);
        prop_assume!(cut < bytes.len());

        let mut input = &bytes[..cut];
        let err = BinaryReader::new(&mut input, format).read_i64().unwrap_err();
        prop_assert!(err.is_eof());
    }
}
