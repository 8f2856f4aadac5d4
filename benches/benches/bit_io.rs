//! Benchmarks for bit and field throughput over an in-memory stream
//!
//! Run with: cargo bench --bench bit_io

use bitfile_core::Mode;
use bitfile_stream::BitStream;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io::Cursor;

const NUM_BYTES: usize = 64 * 1024;

fn encoded_fields(width: u32) -> Vec<u8> {
    let mut writer = BitStream::new(Cursor::new(Vec::new()), Mode::WriteOnly);
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    for i in 0..(NUM_BYTES * 8 / width as usize) as u64 {
        writer.write_bits(i.wrapping_mul(0x9E37_79B9_7F4A_7C15) & mask, width).unwrap();
    }
    writer.into_inner().unwrap().into_inner()
}

fn bench_single_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Bits");

    group.bench_function("write_bit_64k_bytes", |b| {
        b.iter(|| {
            let mut writer =
                BitStream::new(Cursor::new(Vec::with_capacity(NUM_BYTES)), Mode::WriteOnly);
            for i in 0..NUM_BYTES * 8 {
                writer.write_bit(black_box(i % 3 == 0)).unwrap();
            }
            writer.into_inner().unwrap()
        });
    });

    let data = encoded_fields(8);
    group.bench_function("read_bit_64k_bytes", |b| {
        b.iter(|| {
            let mut reader = BitStream::new(Cursor::new(black_box(data.clone())), Mode::ReadOnly);
            let mut ones = 0u32;
            for _ in 0..NUM_BYTES * 8 {
                ones += reader.read_bit().unwrap() as u32;
            }
            ones
        });
    });

    group.finish();
}

fn bench_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Fields");

    for width in [3u32, 8, 13, 32, 64] {
        let data = encoded_fields(width);
        let count = NUM_BYTES * 8 / width as usize;
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };

        group.bench_with_input(BenchmarkId::new("write_bits", width), &width, |b, &width| {
            b.iter(|| {
                let mut writer =
                    BitStream::new(Cursor::new(Vec::with_capacity(NUM_BYTES)), Mode::WriteOnly);
                for i in 0..count as u64 {
                    writer.write_bits(black_box(i & mask), width).unwrap();
                }
                writer.into_inner().unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("read_bits", width), &width, |b, &width| {
            b.iter(|| {
                let mut reader =
                    BitStream::new(Cursor::new(black_box(data.clone())), Mode::ReadOnly);
                let mut sum = 0u64;
                for _ in 0..count {
                    sum = sum.wrapping_add(reader.read_bits(width).unwrap());
                }
                sum
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_bits, bench_fields);
criterion_main!(benches);
