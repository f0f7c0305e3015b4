//! # wire-codec
//!
//! Bit-exact binary encoding of primitive values over abstract byte streams.
//!
//! A `BinaryWriter` encodes `bool`, 8/16/32/64-bit integers, `f32`/`f64` and
//! sequence-length prefixes into any `ByteSink`; a `BinaryReader` decodes them
//! from any `ByteSource`. Both are configured with an immutable `WireFormat`:
//!
//! - **byte order**: big or little endian, swapped only when it differs from the host
//! - **compaction**: integers as a width header plus the minimal magnitude bytes
//!   instead of their full fixed width
//!
//! Container and struct traversal belong to higher layers, which call into
//! this codec once per field or element.
//!
//! ## Example
//! ```rust
//! use wire_codec::{BinaryReader, BinaryWriter, ByteOrder, WireFormat};
//!
//! let format = WireFormat::compacted(ByteOrder::Little);
//!
//! let mut out = Vec::new();
//! let mut writer = BinaryWriter::new(&mut out, format);
//! writer.write_u32(300)?;
//! writer.write_i64(-5)?;
//! writer.write_str("hi")?;
//! assert_eq!(out, [0x02, 0x2C, 0x01, 0x81, 0x05, 0x01, 0x02, b'h', b'i']);
//!
//! let mut input = &out[..];
//! let mut reader = BinaryReader::new(&mut input, format);
//! assert_eq!(reader.read::<u32>()?, 300);
//! assert_eq!(reader.read::<i64>()?, -5);
//! assert_eq!(reader.read_string()?, "hi");
//! # Ok::<(), wire_codec::CodecError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod stream;
pub mod utils;

pub use crate::core::codec::FrameCodec;
pub use crate::core::format::{ByteOrder, WireFormat};
pub use crate::core::primitive::Primitive;
pub use crate::core::reader::BinaryReader;
pub use crate::core::writer::BinaryWriter;
pub use crate::error::{CodecError, Result};
pub use crate::stream::{ByteSink, ByteSource, IoStream, Metered, SliceSink};
