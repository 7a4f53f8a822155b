//! mrucache: a fixed-capacity cache that evicts the most recently used entry.
//!
//! The cache itself is [`policy::mru::MruCache`]; [`builder`] and
//! [`policy::mru::FixedMruCache`] cover other ways of constructing it, and
//! [`traits`] exposes its capabilities generically. Storage is built from the
//! safe arena-backed structures in [`ds`].
//!
//! ```
//! use mrucache::prelude::*;
//!
//! let mut cache = MruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! assert_eq!(cache.len(), 2);
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
