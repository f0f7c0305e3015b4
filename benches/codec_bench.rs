use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use tokio_util::codec::{Decoder, Encoder};
use wire_codec::{BinaryReader, BinaryWriter, ByteOrder, FrameCodec, WireFormat};

const FORMATS: [(&str, WireFormat); 4] = [
    ("fixed_be", WireFormat::fixed(ByteOrder::Big)),
    ("fixed_le", WireFormat::fixed(ByteOrder::Little)),
    ("compacted_be", WireFormat::compacted(ByteOrder::Big)),
    ("compacted_le", WireFormat::compacted(ByteOrder::Little)),
];

#[allow(clippy::unwrap_used)]
fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_encode_decode");
    let values: Vec<i64> = (0..1024).map(|i| (i * 7919 - 4_000_000) << (i % 40)).collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    for (name, format) in FORMATS {
        group.bench_function(format!("encode_{name}"), |b| {
            let mut out = Vec::with_capacity(values.len() * 9);
            b.iter(|| {
                out.clear();
                let mut writer = BinaryWriter::new(&mut out, format);
                for &value in &values {
                    writer.write_i64(black_box(value)).unwrap();
                }
            })
        });

        let mut encoded = Vec::new();
        {
            let mut writer = BinaryWriter::new(&mut encoded, format);
            for &value in &values {
                writer.write_i64(value).unwrap();
            }
        }
        group.bench_function(format!("decode_{name}"), |b| {
            b.iter(|| {
                let mut input = &encoded[..];
                let mut reader = BinaryReader::new(&mut input, format);
                for _ in 0..values.len() {
                    black_box(reader.read_i64().unwrap());
                }
            })
        });
    }

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_encode_decode");
    let values: Vec<f64> = (0..1024).map(|i| f64::from(i) * 1.618).collect();
    group.throughput(Throughput::Bytes((values.len() * 8) as u64));

    for (name, format) in [FORMATS[0], FORMATS[1]] {
        group.bench_function(format!("roundtrip_{name}"), |b| {
            b.iter_batched(
                || Vec::with_capacity(values.len() * 8),
                |mut out| {
                    BinaryWriter::new(&mut out, format)
                        .write_slice(&values)
                        .unwrap();
                    let mut input = &out[..];
                    black_box(BinaryReader::new(&mut input, format).read_vec::<f64>().unwrap());
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_encode_decode");
    let payload_sizes = [64usize, 512, 4096, 65536];

    for &size in &payload_sizes {
        let payload = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("roundtrip_{size}b"), |b| {
            let mut codec = FrameCodec::new(WireFormat::compacted(ByteOrder::Little));
            b.iter_batched(
                || BytesMut::with_capacity(size + 16),
                |mut buf| {
                    codec.encode(&payload[..], &mut buf).unwrap();
                    let frame = codec.decode(&mut buf).unwrap();
                    assert!(frame.is_some());
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integers, bench_floats, bench_frames);
criterion_main!(benches);
