//! Benchmarks for the sorted list.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- insert
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sorted_list::SortedList;

// ============================================================================
// HELPER FUNCTIONS - Deterministic value generation
// ============================================================================

/// Generate a shuffled batch of values with a seeded RNG.
/// Same seed = same batch.
fn generate_shuffled(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u64> = (0..count as u64).collect();
    values.shuffle(&mut rng);
    values
}

/// Pre-populate a list with `count` shuffled values
fn populate(count: usize, seed: u64) -> SortedList<u64> {
    let mut list = SortedList::with_capacity(count);
    for value in generate_shuffled(count, seed) {
        list.insert(value);
    }
    list
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// Insertion throughput for ascending, descending, and shuffled input.
///
/// Ascending input is the worst case for the splice scan (every insert
/// walks the whole chain); descending input is the best case (every
/// insert becomes the new head).
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &count in &[100usize, 1_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("ascending", count), &count, |b, &count| {
            b.iter_batched(
                || SortedList::with_capacity(count),
                |mut list| {
                    for v in 0..count as u64 {
                        list.insert(black_box(v));
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("descending", count), &count, |b, &count| {
            b.iter_batched(
                || SortedList::with_capacity(count),
                |mut list| {
                    for v in (0..count as u64).rev() {
                        list.insert(black_box(v));
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("shuffled", count), &count, |b, &count| {
            let values = generate_shuffled(count, 42);
            b.iter_batched(
                || SortedList::with_capacity(count),
                |mut list| {
                    for &v in &values {
                        list.insert(black_box(v));
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Lookup throughput: index_of and contains over a populated list.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for &count in &[100usize, 1_000] {
        let list = populate(count, 42);

        group.bench_with_input(BenchmarkId::new("index_of", count), &count, |b, &count| {
            b.iter(|| {
                // Probe across the whole range, hits and misses alike
                let probe = black_box(count as u64 / 2);
                black_box(list.index_of(&probe))
            });
        });

        group.bench_with_input(BenchmarkId::new("get_middle", count), &count, |b, &count| {
            b.iter(|| black_box(list.get(black_box(count / 2))));
        });

        group.bench_with_input(BenchmarkId::new("first_last", count), &count, |b, _| {
            b.iter(|| (black_box(list.first()), black_box(list.last())));
        });
    }

    group.finish();
}

/// Removal throughput: drain a populated list in shuffled order.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for &count in &[100usize, 1_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("drain_shuffled", count), &count, |b, &count| {
            let order = generate_shuffled(count, 7);
            b.iter_batched(
                || populate(count, 42),
                |mut list| {
                    for v in &order {
                        list.remove(v);
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
