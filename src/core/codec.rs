//! # Frame Codec
//!
//! `tokio_util::codec` adapter that frames byte payloads with a sequence-length
//! prefix encoded in the configured `WireFormat`.
//!
//! ## Wire Format
//! ```text
//! [SeqSize(8 fixed | 2..9 compacted)] [Payload(N)]
//! ```
//!
//! Decoding peeks at the prefix without consuming it. An incomplete prefix or
//! payload yields `Ok(None)` and leaves the buffer untouched; a prefix larger
//! than `max_frame_len` is rejected before anything is allocated.
//!
//! The prefix is decoded like any compacted integer, so a compacted big-endian
//! prefix narrower than 8 bytes reads back shifted into the high bytes. Peers
//! framing with compaction use little-endian formats.

use super::format::WireFormat;
use super::reader::BinaryReader;
use super::writer::BinaryWriter;
use crate::config::{CodecConfig, MAX_FRAME_LEN};
use crate::error::{CodecError, Result};
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

/// Largest possible length prefix: fixed 8 bytes or compacted 1 + 8.
const MAX_PREFIX_LEN: usize = 9;

/// Length-prefixed frame codec
#[derive(Debug, Clone, Copy)]
pub struct FrameCodec {
    format: WireFormat,
    max_frame_len: usize,
}

impl FrameCodec {
    pub fn new(format: WireFormat) -> Self {
        debug!(?format, max_frame_len = MAX_FRAME_LEN, "Frame codec created");
        Self {
            format,
            max_frame_len: MAX_FRAME_LEN,
        }
    }

    /// Codec with the wire format and frame limit of a loaded configuration.
    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.wire_format()).with_max_frame_len(config.limits.max_frame_len)
    }

    pub fn with_max_frame_len(mut self, max_frame_len: usize) -> Self {
        self.max_frame_len = max_frame_len;
        self
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn max_frame_len(&self) -> usize {
        self.max_frame_len
    }

    fn too_long(&self, len: u64) -> CodecError {
        warn!(len, max = self.max_frame_len, "Rejecting oversized frame");
        CodecError::SequenceTooLong {
            len,
            max: self.max_frame_len as u64,
        }
    }

    fn encode_frame(&self, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
        if payload.len() > self.max_frame_len {
            return Err(self.too_long(payload.len() as u64));
        }
        dst.reserve(MAX_PREFIX_LEN + payload.len());
        BinaryWriter::new(dst, self.format).write_bytes(payload)
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new(WireFormat::default())
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        self.encode_frame(&item, dst)
    }
}

impl Encoder<&[u8]> for FrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<()> {
        self.encode_frame(item, dst)
    }
}

impl Decoder for FrameCodec {
    type Item = BytesMut;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<BytesMut>> {
        let (len, prefix_len) = {
            let mut peek: &[u8] = &src[..];
            let len = match BinaryReader::new(&mut peek, self.format).read_seq_size() {
                Ok(len) => len,
                Err(e) if e.is_eof() => return Ok(None),
                Err(e) => return Err(e),
            };
            (len, src.len() - peek.len())
        };

        let len = match usize::try_from(len) {
            Ok(n) if n <= self.max_frame_len => n,
            _ => return Err(self.too_long(len)),
        };

        let total = prefix_len + len;
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        src.advance(prefix_len);
        Ok(Some(src.split_to(len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::ByteOrder;

    #[test]
    fn test_fixed_prefix_layout() {
        let mut codec = FrameCodec::new(WireFormat::fixed(ByteOrder::Big));
        let mut buf = BytesMut::new();
        codec.encode(&b"abc"[..], &mut buf).unwrap();
        assert_eq!(&buf[..], &[0, 0, 0, 0, 0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_compacted_prefix_layout() {
        let mut codec = FrameCodec::new(WireFormat::compacted(ByteOrder::Little));
        let mut buf = BytesMut::new();
        codec.encode(Bytes::from_static(b"xy"), &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02, b'x', b'y']);
    }

    #[test]
    fn test_decode_waits_for_payload() {
        let mut codec = FrameCodec::new(WireFormat::compacted(ByteOrder::Little));
        let mut buf = BytesMut::from(&[0x01, 0x04, 1, 2][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 4);

        buf.extend_from_slice(&[3, 4]);
        let frame = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&frame[..], &[1, 2, 3, 4]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_rejects_corrupt_prefix() {
        let mut codec = FrameCodec::new(WireFormat::compacted(ByteOrder::Big));
        let mut buf = BytesMut::from(&[0x03, 0, 0, 0][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(CodecError::InvalidEncodedWidth(3))
        ));
    }

    #[test]
    fn test_oversized_frames_rejected() {
        let mut codec = FrameCodec::new(WireFormat::default()).with_max_frame_len(4);
        let mut buf = BytesMut::new();
        assert!(matches!(
            codec.encode(&[0u8; 5][..], &mut buf),
            Err(CodecError::SequenceTooLong { len: 5, max: 4 })
        ));

        let mut incoming = BytesMut::from(&100u64.to_le_bytes()[..]);
        assert!(matches!(
            codec.decode(&mut incoming),
            Err(CodecError::SequenceTooLong { len: 100, max: 4 })
        ));
    }

    #[test]
    fn test_from_config() {
        let config = CodecConfig::default_with_overrides(|c| {
            c.format.compacted = true;
            c.limits.max_frame_len = 8;
        });
        let mut codec = FrameCodec::from_config(&config);
        assert_eq!(codec.format(), WireFormat::compacted(ByteOrder::Little));
        assert_eq!(codec.max_frame_len(), 8);

        let mut buf = BytesMut::from(&[0x01, 0x09][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(CodecError::SequenceTooLong { len: 9, max: 8 })
        ));
    }
}
