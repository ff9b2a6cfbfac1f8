use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use message_header::{Message, MessageCodec, MessageHeader};
use tokio_util::codec::{Decoder, Encoder};

#[allow(clippy::unwrap_used)]
fn bench_header_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_encode_decode");
    let shapes = [
        ("fixed", MessageHeader::new().with_message_id(1)),
        (
            "source",
            MessageHeader::new().with_message_id(1).with_source_node_id(2),
        ),
        (
            "both",
            MessageHeader::new()
                .with_message_id(1)
                .with_source_node_id(2)
                .with_destination_node_id(3),
        ),
    ];

    for (name, header) in shapes {
        let size = header.encoded_size();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encode_{name}"), |b| {
            let mut buf = [0u8; 22];
            b.iter(|| header.encode(&mut buf).unwrap())
        });
        group.bench_function(format!("decode_{name}"), |b| {
            let bytes = header.encode_to_vec();
            b.iter(|| {
                let decoded = MessageHeader::decode(&bytes);
                assert!(decoded.is_ok());
            })
        });
    }

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_message_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_codec");
    let header = MessageHeader::new()
        .with_message_id(7)
        .with_destination_node_id(9);

    for size in [0usize, 64, 512, 1024] {
        group.throughput(Throughput::Bytes((size + header.encoded_size()) as u64));
        group.bench_function(format!("roundtrip_{size}b"), |b| {
            b.iter_batched(
                || vec![0u8; size],
                |payload| {
                    let mut codec = MessageCodec::default();
                    let mut buf = BytesMut::with_capacity(size + 32);
                    codec.encode(Message::new(header, payload), &mut buf).unwrap();
                    codec.decode(&mut buf).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_header_encode_decode, bench_message_codec);
criterion_main!(benches);
