//! Benchmarks for single-frame encode and decode paths
//!
//! Tests parsing performance for:
//! - Full frame decode into a TelemetryRecord
//! - Frame validation (header/trailer marker scan)
//! - Synthetic frame encoding with checksum and alphabetic fold
//!
//! Platform: Cross-platform (no external data, CI-safe)

use binnacle::wire::{self, FRAME_LEN, FrameInput, RawFrame, validate};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn reference_frame() -> [u8; FRAME_LEN] {
    wire::encode(&FrameInput {
        day: 120,
        time_ref_cs: 4_321_000,
        heading: 16384,
        roll: -8192,
        pitch: 4096,
        ins_latitude: 0x2000_0000,
        ins_longitude: -0x1000_0000,
        speed_over_ground: 1500,
        ..Default::default()
    })
}

fn bench_decode(c: &mut Criterion) {
    let frame = reference_frame();

    let mut group = c.benchmark_group("frame_decode");
    group.throughput(Throughput::Bytes(FRAME_LEN as u64));

    group.bench_function("decode_record", |b| {
        b.iter(|| {
            let record = wire::decode(black_box(&frame)).unwrap();
            black_box(record)
        })
    });

    group.bench_function("validate_window", |b| {
        b.iter(|| black_box(validate(black_box(&frame))))
    });

    group.bench_function("checksum_verify", |b| {
        let raw = RawFrame::from_window(&frame).unwrap();
        b.iter(|| black_box(raw.checksum_ok()))
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let input = FrameInput { day: 120, heading: 16384, ..Default::default() };

    let mut group = c.benchmark_group("frame_encode");
    group.throughput(Throughput::Bytes(FRAME_LEN as u64));

    group.bench_function("encode_frame", |b| {
        b.iter(|| {
            let frame = wire::encode(black_box(&input));
            black_box(frame)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
