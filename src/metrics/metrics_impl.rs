use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::MruMetricsSnapshot;
use crate::metrics::traits::{CoreMetricsRecorder, MruMetricsReadRecorder, MruMetricsRecorder};

#[derive(Debug, Default)]
pub struct MruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clear_calls: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub pop_mru_calls: u64,
    pub pop_mru_found: u64,
    pub peek_mru_calls: MetricsCell,
    pub peek_mru_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

impl MruMetrics {
    /// Copies the counters; occupancy is supplied by the owning cache.
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> MruMetricsSnapshot {
        MruMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            remove_calls: self.remove_calls,
            remove_found: self.remove_found,
            clear_calls: self.clear_calls,
            touch_calls: self.touch_calls,
            touch_found: self.touch_found,
            pop_mru_calls: self.pop_mru_calls,
            pop_mru_found: self.pop_mru_found,
            peek_mru_calls: self.peek_mru_calls.get(),
            peek_mru_found: self.peek_mru_found.get(),
            recency_rank_calls: self.recency_rank_calls.get(),
            recency_rank_found: self.recency_rank_found.get(),
            recency_rank_scan_steps: self.recency_rank_scan_steps.get(),
            cache_len,
            capacity,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for MruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls = self.get_calls.saturating_add(1);
        self.get_hits = self.get_hits.saturating_add(1);
    }

    fn record_get_miss(&mut self) {
        self.get_calls = self.get_calls.saturating_add(1);
        self.get_misses = self.get_misses.saturating_add(1);
    }

    fn record_insert_call(&mut self) {
        self.insert_calls = self.insert_calls.saturating_add(1);
    }

    fn record_insert_new(&mut self) {
        self.insert_new = self.insert_new.saturating_add(1);
    }

    fn record_insert_update(&mut self) {
        self.insert_updates = self.insert_updates.saturating_add(1);
    }

    fn record_evict_call(&mut self) {
        self.evict_calls = self.evict_calls.saturating_add(1);
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries = self.evicted_entries.saturating_add(1);
    }

    fn record_clear(&mut self) {
        self.clear_calls = self.clear_calls.saturating_add(1);
    }
}

impl MruMetricsRecorder for MruMetrics {
    fn record_remove_call(&mut self) {
        self.remove_calls = self.remove_calls.saturating_add(1);
    }

    fn record_remove_found(&mut self) {
        self.remove_found = self.remove_found.saturating_add(1);
    }

    fn record_touch_call(&mut self) {
        self.touch_calls = self.touch_calls.saturating_add(1);
    }

    fn record_touch_found(&mut self) {
        self.touch_found = self.touch_found.saturating_add(1);
    }

    fn record_pop_mru_call(&mut self) {
        self.pop_mru_calls = self.pop_mru_calls.saturating_add(1);
    }

    fn record_pop_mru_found(&mut self) {
        self.pop_mru_found = self.pop_mru_found.saturating_add(1);
    }
}

impl MruMetricsReadRecorder for &MruMetrics {
    fn record_peek_mru_call(&self) {
        self.peek_mru_calls.incr();
    }

    fn record_peek_mru_found(&self) {
        self.peek_mru_found.incr();
    }

    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_step(&self) {
        self.recency_rank_scan_steps.incr();
    }
}
