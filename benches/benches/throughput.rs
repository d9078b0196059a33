//! MD4 Criterion Benchmark
//!
//! Latency for short messages, bulk throughput, and the cost of streaming
//! with awkward chunk sizes. SHA-256 is measured alongside as a baseline.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha256};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Short messages around the padding thresholds (one vs two final blocks).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (55, "55B"),
        (56, "56B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| md4::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// One-shot throughput against SHA-256 on the same input.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (16 * MB, "16MB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("md4", name),
            &input,
            |b, data| b.iter(|| md4::hash(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("sha256", name),
            &input,
            |b, data| b.iter(|| Sha256::digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Streaming cost when chunks straddle block boundaries.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");

    let size = MB;
    let input = random_input(size);
    group.throughput(Throughput::Bytes(size as u64));

    for chunk_size in [1, 63, 64, 4 * KB, 128 * KB] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("chunk-{chunk_size}")),
            &chunk_size,
            |b, &cs| {
                b.iter(|| {
                    let mut hasher = md4::Hasher::new();
                    for chunk in input.chunks(cs) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }

    let hash = md4::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| md4::verify(black_box(&input), black_box(&hash)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_bulk, bench_streaming);
criterion_main!(benches);
