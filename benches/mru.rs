//! Micro-operation benchmarks for the MRU cache.
//!
//! Run with: `cargo bench --bench mru`
//!
//! Measures per-operation latency for lookups, inserts, eviction and the
//! O(n) recency scan.

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mrucache::builder::MruCacheBuilder;
use mrucache::policy::mru::MruCache;

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

fn filled(capacity: usize) -> MruCache<u64, u64> {
    let mut cache = MruCache::new(capacity);
    for i in 0..capacity as u64 {
        cache.insert(i, i);
    }
    cache
}

// ============================================================================
// Lookups
// ============================================================================

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("try_get_hit", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled(CAPACITY);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.try_get(&(i % CAPACITY as u64)));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("try_get_miss", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled(CAPACITY);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.try_get(&(CAPACITY as u64 + i)));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("peek_hit", |b| {
        b.iter_custom(|iters| {
            let cache = filled(CAPACITY);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.peek(&(i % CAPACITY as u64)));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Inserts
// ============================================================================

fn bench_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("update_resident", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled(CAPACITY);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(cache.insert(i % CAPACITY as u64, i));
                }
            }
            start.elapsed()
        })
    });

    // every insert is a new key into a full cache
    group.bench_function("evicting", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled(CAPACITY);
            let mut next = CAPACITY as u64;
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    black_box(cache.insert(next, next));
                    next += 1;
                }
            }
            start.elapsed()
        })
    });

    for preallocate in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("fill_from_empty", preallocate),
            &preallocate,
            |b, &preallocate| {
                b.iter(|| {
                    let mut cache = MruCacheBuilder::new(CAPACITY)
                        .preallocate(preallocate)
                        .build::<u64, u64>();
                    for i in 0..CAPACITY as u64 {
                        cache.insert(i, i);
                    }
                    black_box(cache.len())
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Recency scan
// ============================================================================

fn bench_recency_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("recency_rank");

    for capacity in [64usize, 1_024, 16_384] {
        let cache = filled(capacity);
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &cache, |b, cache| {
            // key 0 is least recent: worst case
            b.iter(|| black_box(cache.recency_rank(&0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookups, bench_inserts, bench_recency_rank);
criterion_main!(benches);
