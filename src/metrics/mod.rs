//! Optional operation counters for the cache (cargo feature `metrics`).
//!
//! Recording, snapshotting and exporting are separate traits so the cache
//! only ever writes counters; consumers read them through
//! [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider) and publish
//! them through [`MetricsExporter`](traits::MetricsExporter).
//!
//! ```
//! use mrucache::metrics::exporter::PrometheusTextExporter;
//! use mrucache::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
//! use mrucache::policy::mru::MruCache;
//!
//! let mut cache = MruCache::new(2);
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.insert(3, "three");
//!
//! let snapshot = cache.snapshot();
//! assert_eq!(snapshot.evicted_entries, 1);
//!
//! let exporter = PrometheusTextExporter::new("mru", Vec::new());
//! exporter.export(&snapshot);
//! let text = String::from_utf8(exporter.into_inner()).unwrap();
//! assert!(text.contains("mru_evicted_entries_total 1"));
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
