// ==============================================
// METRICS TESTS (integration, feature = "metrics")
// ==============================================

#![cfg(feature = "metrics")]

use mrucache::metrics::exporter::PrometheusTextExporter;
use mrucache::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
use mrucache::policy::mru::MruCache;

#[test]
fn snapshot_tracks_full_lifecycle() {
    let mut cache = MruCache::new(2);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);
    cache.try_get(&"a");
    cache.try_get(&"b");
    cache.remove(&"c");
    cache.remove(&"c");
    cache.touch(&"a");
    cache.pop_mru();
    cache.clear();

    let s = cache.snapshot();
    assert_eq!(s.insert_calls, 3);
    assert_eq!(s.insert_new, 3);
    assert_eq!(s.evicted_entries, 1);
    assert_eq!(s.get_hits, 1);
    assert_eq!(s.get_misses, 1);
    assert_eq!(s.remove_calls, 2);
    assert_eq!(s.remove_found, 1);
    assert_eq!(s.touch_found, 1);
    assert_eq!(s.pop_mru_found, 1);
    assert_eq!(s.clear_calls, 1);
    assert_eq!(s.cache_len, 0);
    assert!((s.hit_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn prometheus_text_contains_counters() {
    let mut cache = MruCache::new(4);
    for k in 0..6 {
        cache.insert(k, k);
    }

    let exporter = PrometheusTextExporter::new("mru", Vec::new());
    exporter.export(&cache.snapshot());
    let text = String::from_utf8(exporter.into_inner()).unwrap();

    assert!(text.contains("mru_insert_calls_total 6"));
    assert!(text.contains("mru_evicted_entries_total 2"));
    assert!(text.contains("mru_cache_len 4"));
    assert!(text.contains("mru_capacity 4"));
}
