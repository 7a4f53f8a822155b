//! # Metrics Traits
//!
//! Recorders only write counters, providers only snapshot them, exporters
//! only publish snapshots.
//!
//! ```text
//!   ┌──────────────────────────┐
//!   │   CoreMetricsRecorder    │  get hit/miss, insert new/update,
//!   │                          │  evict, clear
//!   └────────────┬─────────────┘
//!                ▼
//!   ┌──────────────────────────┐      ┌──────────────────────────┐
//!   │   MruMetricsRecorder     │      │  MruMetricsReadRecorder  │
//!   │  remove, touch, pop_mru  │      │  peek_mru, recency_rank  │
//!   │  (&mut self)             │      │  (&self, interior mut.)  │
//!   └──────────────────────────┘      └──────────────────────────┘
//!
//!   MetricsSnapshotProvider<S>  ──►  S  ──►  MetricsExporter<S>
//! ```

/// Counters shared by every cache operation set.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// MRU-specific counters recorded from `&mut self` methods.
pub trait MruMetricsRecorder: CoreMetricsRecorder {
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_pop_mru_call(&mut self);
    fn record_pop_mru_found(&mut self);
}

/// MRU counters recorded from `&self` methods.
pub trait MruMetricsReadRecorder {
    fn record_peek_mru_call(&self);
    fn record_peek_mru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Produces a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a snapshot to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
