//! Builder for [`MruCache`] instances.
//!
//! Construction options beyond the capacity live here so the cache's own
//! constructors stay small.
//!
//! ## Example
//!
//! ```rust
//! use mrucache::builder::MruCacheBuilder;
//!
//! let mut cache = MruCacheBuilder::new(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::mru::MruCache;

/// Builder for creating [`MruCache`] instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MruCacheBuilder {
    capacity: usize,
    preallocate: bool,
}

impl MruCacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preallocate: true,
        }
    }

    /// Reserve index and arena storage for the full capacity at build time.
    ///
    /// On by default. Turn off for large, sparsely filled caches.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    /// Build the cache, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mrucache::builder::MruCacheBuilder;
    ///
    /// assert!(MruCacheBuilder::new(0).try_build::<u64, u64>().is_err());
    ///
    /// let cache = MruCacheBuilder::new(16)
    ///     .preallocate(false)
    ///     .try_build::<u64, u64>()
    ///     .unwrap();
    /// assert_eq!(cache.capacity(), 16);
    /// ```
    pub fn try_build<K, V>(self) -> Result<MruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        MruCache::with_options(self.capacity, self.preallocate)
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn build<K, V>(self) -> MruCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }
}
