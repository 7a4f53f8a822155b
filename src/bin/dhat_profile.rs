//! DHAT heap profiler for mrucache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use mrucache::builder::MruCacheBuilder;
use mrucache::policy::mru::MruCache;
use mrucache::traits::{CoreCache, MutableCache};

/// XorShift64 so runs are reproducible without pulling in `rand`.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// Read-through hotset: 90% of accesses hit 10% of keys.
fn hotset_workload<C: CoreCache<u64, Vec<u8>>>(cache: &mut C, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = UNIVERSE / 10;

    for _ in 0..OPERATIONS {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (UNIVERSE - hot_size))
        };

        if cache.get(&key).is_none() {
            let _ = cache.insert(key, vec![0u8; 32]);
        }
    }
}

/// Cyclic scan over a universe larger than the cache.
fn scan_workload<C: CoreCache<u64, Vec<u8>>>(cache: &mut C) {
    for i in 0..OPERATIONS / 2 {
        let key = (i as u64) % UNIVERSE;
        if cache.get(&key).is_none() {
            let _ = cache.insert(key, vec![0u8; 32]);
        }
    }
}

/// Inserts interleaved with removals; freed arena slots should be reused.
fn remove_churn<C: MutableCache<u64, Vec<u8>>>(cache: &mut C, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for i in 0..OPERATIONS / 4 {
        let _ = cache.insert(i as u64, vec![0u8; 32]);
        let _ = cache.remove(&(rng.next_u64() % (i as u64 + 1)));
    }
}

fn run(label: &str, mut cache: MruCache<u64, Vec<u8>>) {
    println!("=== Profiling MRU ({}) ===", label);

    for i in 0..CAPACITY as u64 {
        cache.insert(i, vec![0u8; 32]);
    }

    hotset_workload(&mut cache, 42);
    scan_workload(&mut cache);
    remove_churn(&mut cache, 7);

    println!("  Final size: {}", cache.len());
    println!("  Approx bytes: {}", cache.approx_bytes());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("mrucache DHAT Heap Profiling");
    println!("============================\n");

    run("preallocated", MruCache::new(CAPACITY));
    run(
        "lazy",
        MruCacheBuilder::new(CAPACITY).preallocate(false).build(),
    );

    println!("\n============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
