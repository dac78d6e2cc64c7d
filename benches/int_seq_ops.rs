//! Benchmarks for `IntSeq`.
//!
//! - Amortized `push_back` from an empty sequence
//! - `insert` at the front (worst-case shifting)
//! - Three-reversal `right_rotate` against repeated `right_rotate_one`
//! - `find_transposition` on a skewed access pattern
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use int_seq::IntSeq;

fn filled(n: usize) -> IntSeq {
    (0..n as i32).collect()
}

/// Benchmark appends, including every doubling along the way
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut s = IntSeq::default();
                for i in 0..size as i32 {
                    s.push_back(black_box(i));
                }
                black_box(s.len())
            });
        });
    }
    group.finish();
}

/// Benchmark inserts at index 0, which shift the whole live prefix
fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [100, 1_000, 5_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_0", size), size, |b, &size| {
            b.iter(|| {
                let mut s = IntSeq::default();
                for i in 0..size as i32 {
                    s.insert(0, black_box(i)).unwrap();
                }
                black_box(s.front())
            });
        });
    }
    group.finish();
}

/// Compare three-reversal rotation with the single-step loop it replaces
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("right_rotate");
    let size = 10_000;

    for times in [1usize, 100, 5_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("three_reversal", times),
            times,
            |b, &times| {
                b.iter_batched(
                    || filled(size),
                    |mut s| {
                        s.right_rotate(black_box(times));
                        s
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("repeated_single", times),
            times,
            |b, &times| {
                b.iter_batched(
                    || filled(size),
                    |mut s| {
                        for _ in 0..times {
                            s.right_rotate_one();
                        }
                        s
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

/// Benchmark the self-organizing search when a few values dominate lookups
fn bench_find_transposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_transposition");
    let size = 10_000;

    group.bench_function("hot_values", |b| {
        b.iter_batched(
            || filled(size),
            |mut s| {
                for round in 0..1_000 {
                    let target = (size as i32 - 1) - (round % 4);
                    black_box(s.find_transposition(target));
                }
                s
            },
            criterion::BatchSize::SmallInput,
        );
    });
    group.bench_function("plain_find", |b| {
        let s = filled(size);
        b.iter(|| {
            for round in 0..1_000 {
                let target = (size as i32 - 1) - (round % 4);
                black_box(s.find(target));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_insert_front,
    bench_rotation,
    bench_find_transposition
);
criterion_main!(benches);
