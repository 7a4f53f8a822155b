//! Key-stream generators shared by the benchmarks.
//!
//! Streams are seeded so repeated runs compare like with like.

use mrucache::traits::CoreCache;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Uniform random keys in `[0, universe)`.
    Uniform,
    /// Hot/cold split with a configurable hot fraction and hot access probability.
    HotSet { hot_fraction: f64, hot_prob: f64 },
    /// Repeated sequential scan over `[0, universe)`.
    Scan,
    /// Sequential scan with a random jump back every `period` keys.
    ScanWithJitter { period: u64 },
}

pub struct WorkloadGenerator {
    universe: u64,
    workload: Workload,
    rng: SmallRng,
    scan_pos: u64,
}

impl WorkloadGenerator {
    pub fn new(universe: u64, workload: Workload, seed: u64) -> Self {
        Self {
            universe: universe.max(1),
            workload,
            rng: SmallRng::seed_from_u64(seed),
            scan_pos: 0,
        }
    }

    pub fn next_key(&mut self) -> u64 {
        match self.workload {
            Workload::Uniform => self.rng.gen_range(0..self.universe),
            Workload::HotSet {
                hot_fraction,
                hot_prob,
            } => {
                let hot_size = ((self.universe as f64) * hot_fraction.clamp(0.0, 1.0)).round() as u64;
                let hot_size = hot_size.clamp(1, self.universe);
                if self.rng.gen_bool(hot_prob.clamp(0.0, 1.0)) || hot_size == self.universe {
                    self.rng.gen_range(0..hot_size)
                } else {
                    self.rng.gen_range(hot_size..self.universe)
                }
            },
            Workload::Scan => self.advance_scan(),
            Workload::ScanWithJitter { period } => {
                if period > 0 && self.scan_pos % period == period - 1 {
                    self.scan_pos = self.rng.gen_range(0..self.universe);
                }
                self.advance_scan()
            },
        }
    }

    fn advance_scan(&mut self) -> u64 {
        let key = self.scan_pos;
        self.scan_pos = (self.scan_pos + 1) % self.universe;
        key
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HitRate {
    pub hits: u64,
    pub misses: u64,
}

impl HitRate {
    pub fn hit_rate(self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Read-through loop: lookup, insert on miss.
pub fn run_hit_rate<C>(cache: &mut C, generator: &mut WorkloadGenerator, operations: usize) -> HitRate
where
    C: CoreCache<u64, u64>,
{
    let mut rate = HitRate::default();
    for _ in 0..operations {
        let key = generator.next_key();
        if cache.get(&key).is_some() {
            rate.hits += 1;
        } else {
            rate.misses += 1;
            let _ = cache.insert(key, key);
        }
    }
    rate
}
