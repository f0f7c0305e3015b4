//! # Error Types
//!
//! Error handling for the binary codec.
//!
//! Every read or write either completes fully or returns one of these variants.
//! Nothing is retried and nothing is clamped: a short transfer, a corrupt width
//! header or an oversized length prefix is always a hard failure.
//!
//! ## Error Categories
//! - **Stream Errors**: short reads (`ReadUnderrun`) and short writes (`WriteFailure`)
//! - **Format Errors**: corrupt compacted headers, unencodable magnitudes, bad UTF-8
//! - **Limit Errors**: length prefixes above the configured maximum
//! - **Configuration Errors**: invalid TOML or environment overrides
//!
//! ## Example Usage
//! ```rust
//! use wire_codec::error::{CodecError, Result};
//! use wire_codec::{BinaryReader, WireFormat};
//!
//! fn read_header(mut bytes: &[u8]) -> Result<(u16, u32)> {
//!     let mut reader = BinaryReader::new(&mut bytes, WireFormat::default());
//!     Ok((reader.read_u16()?, reader.read_u32()?))
//! }
//!
//! match read_header(&[0x01, 0x00]) {
//!     Err(CodecError::ReadUnderrun { expected, read }) => assert_eq!((expected, read), (4, 0)),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants shared by validation and logging paths.
pub mod constants {
    pub const ERR_READ_UNDERRUN: &str = "Byte source returned fewer bytes than requested";
    pub const ERR_WRITE_FAILURE: &str = "Byte sink accepted fewer bytes than requested";
    pub const ERR_INVALID_WIDTH: &str = "Compacted header carries an invalid width";
    pub const ERR_SEQUENCE_TOO_LONG: &str = "Sequence length exceeds configured maximum";
}

/// CodecError is the error type for every read, write and framing operation
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Read underrun: expected {expected} bytes, got {read}")]
    ReadUnderrun { expected: usize, read: usize },

    #[error("Write failure: expected to write {expected} bytes, wrote {written}")]
    WriteFailure { expected: usize, written: usize },

    #[error("Invalid encoded width: {0}")]
    InvalidEncodedWidth(u8),

    #[error("Magnitude {0} cannot be encoded as a compacted signed integer")]
    UnrepresentableMagnitude(u64),

    #[error("Sequence length {len} exceeds maximum of {max}")]
    SequenceTooLong { len: u64, max: u64 },

    #[error("Invalid UTF-8 in string payload")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CodecError {
    /// True when the failure means the source ran dry rather than held bad data.
    ///
    /// Framing layers use this to wait for more input instead of aborting.
    pub fn is_eof(&self) -> bool {
        matches!(self, CodecError::ReadUnderrun { .. })
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
