//! Criterion benchmarks for nearest-rider dispatch.
//!
//! Measures assignment time across rider-pool sizes (100, 1000, 5000) to
//! track how the linear selection scan scales. Each iteration rebuilds the
//! store because a successful assignment marks the winning rider busy.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package tiffin-dispatch
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tiffin_core::test_support::{accepted_order, restaurant, rider};
use tiffin_core::{Dispatcher, MemoryStore};
use tiffin_dispatch::NearestRiderDispatcher;

/// Seed for deterministic random number generation in benchmarks.
const BENCHMARK_SEED: u64 = 42;

/// Rider-pool sizes to benchmark.
const POOL_SIZES: &[u64] = &[100, 1_000, 5_000];

/// Pickup point shared by every benchmark run.
const RESTAURANT_AT: Coord<f64> = Coord {
    x: 72.8800,
    y: 19.0850,
};

/// Seed a store with one order and `rider_count` riders scattered across
/// the city.
fn seeded_store(rider_count: u64) -> MemoryStore {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCHMARK_SEED);
    let riders: Vec<_> = (0..rider_count)
        .map(|id| {
            rider(
                id,
                Coord {
                    x: rng.gen_range(72.5..73.3),
                    y: rng.gen_range(18.7..19.4),
                },
            )
        })
        .collect();
    MemoryStore::with_entities(
        vec![restaurant(1, RESTAURANT_AT, Vec::new())],
        riders,
        vec![accepted_order(10, 1)],
    )
}

/// Benchmark assignment times for various rider-pool sizes.
fn bench_assign_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_time");

    for &size in POOL_SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("riders", size), &size, |b, &size| {
            b.iter_batched(
                || NearestRiderDispatcher::new(seeded_store(size)),
                |dispatcher| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking selection performance, result is intentionally discarded"
                    )]
                    let _ = dispatcher.assign(10);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assign_times);
criterion_main!(benches);
