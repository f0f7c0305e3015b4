#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;
use wire_codec::{BinaryReader, ByteOrder, FrameCodec, WireFormat};

const FORMATS: [WireFormat; 4] = [
    WireFormat::fixed(ByteOrder::Big),
    WireFormat::fixed(ByteOrder::Little),
    WireFormat::compacted(ByteOrder::Big),
    WireFormat::compacted(ByteOrder::Little),
];

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary input under every format - must fail cleanly, never panic
    for format in FORMATS {
        let mut input = data;
        let mut reader = BinaryReader::new(&mut input, format).with_max_sequence_len(4096);
        while reader.read_i64().is_ok() {
            let _ = reader.read_u16();
            let _ = reader.read_f32();
        }

        let mut input = data;
        let _ = BinaryReader::new(&mut input, format)
            .with_max_sequence_len(4096)
            .read_string();

        let mut buf = BytesMut::from(data);
        let mut codec = FrameCodec::new(format).with_max_frame_len(4096);
        while let Ok(Some(_)) = codec.decode(&mut buf) {}
    }
});
