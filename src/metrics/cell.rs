use std::sync::atomic::{AtomicU64, Ordering};

/// Counter that can be bumped through a shared reference.
///
/// Used for counters recorded from `&self` methods such as `peek_mru` and
/// `recency_rank`. Atomic so the owning cache stays `Sync` with metrics on;
/// counts saturate at `u64::MAX` like the plain counters in
/// [`MruMetrics`](crate::metrics::metrics_impl::MruMetrics).
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        let _ = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                Some(v.saturating_add(1))
            });
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn incr_through_shared_ref() {
        let cell = MetricsCell::new();
        let shared = &cell;
        shared.incr();
        shared.incr();
        assert_eq!(cell.get(), 2);
        cell.reset();
        assert_eq!(cell.get(), 0);
    }

    #[test]
    fn incr_saturates() {
        let cell = MetricsCell(AtomicU64::new(u64::MAX - 1));
        cell.incr();
        cell.incr();
        assert_eq!(cell.get(), u64::MAX);
    }

    #[test]
    fn shareable_across_threads() {
        assert_send_sync::<MetricsCell>();

        let cell = MetricsCell::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        cell.incr();
                    }
                });
            }
        });
        assert_eq!(cell.get(), 4_000);
    }
}
