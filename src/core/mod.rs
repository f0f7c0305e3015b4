//! # Core Codec
//!
//! Bit-exact encoding and decoding of primitive values.
//!
//! ## Components
//! - **Format**: immutable byte order + compaction descriptor
//! - **Endian**: host/wire byte order normalization
//! - **Width**: minimal width selection for compacted integers
//! - **Writer / Reader**: per-type encode and decode over byte streams
//! - **Codec**: length-prefixed framing for `tokio_util`
//!
//! ## Compacted Integer Format
//! ```text
//! [Header(1)] [Magnitude(1 | 2 | 4 | 8)]
//! Header, unsigned: width
//! Header, signed:   bit 7 = sign, bits 0-6 = width
//! ```

pub mod codec;
pub mod endian;
pub mod format;
pub mod primitive;
pub mod reader;
pub mod width;
pub mod writer;
