//! # Cache Trait Hierarchy
//!
//! Generic interfaces over the cache so callers can write code against a
//! capability rather than a concrete type.
//!
//! ```text
//!   ┌─────────────────────────────────┐
//!   │       ReadOnlyCache<K, V>       │   contains, len, is_empty, capacity
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │         CoreCache<K, V>         │   insert, get, clear
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │        MutableCache<K, V>       │   remove, remove_batch
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │        MruCacheTrait<K, V>      │   pop_mru, peek_mru, touch,
//!   │                                 │   recency_rank
//!   └─────────────────────────────────┘
//! ```
//!
//! `ReadOnlyCache` methods never change recency. `CoreCache::get` is the
//! touching lookup and reports a miss as `None`; the inherent
//! [`MruCache::get`](crate::policy::mru::MruCache::get) reports it as an error.
//!
//! ## Example Usage
//!
//! ```
//! use mrucache::policy::mru::MruCache;
//! use mrucache::traits::{CoreCache, MutableCache, ReadOnlyCache};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (k, v) in data {
//!         cache.insert(*k, v.to_string());
//!     }
//! }
//!
//! fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     cache.remove_batch(keys);
//! }
//!
//! let mut cache = MruCache::new(8);
//! warm(&mut cache, &[(1, "a"), (2, "b"), (3, "c")]);
//! invalidate(&mut cache, &[2]);
//! assert_eq!(ReadOnlyCache::len(&cache), 2);
//! ```
//!
//! ## Thread Safety
//!
//! None of these traits imply `Send`/`Sync` or internal synchronization.
//! Wrap the cache in a lock for shared access.

/// Queries that never change recency.
pub trait ReadOnlyCache<K, V> {
    /// Returns `true` if `key` is resident.
    fn contains(&self, key: &K) -> bool;

    /// Number of resident entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;
}

/// Operations every cache supports.
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts or updates `key`; returns the replaced value on update.
    ///
    /// May evict another entry when the cache is full.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key` and marks it as used on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes every entry. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that allow removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value. Absent keys are a no-op.
    fn remove(&mut self, key: &K) -> Option<V>;

    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// MRU-specific operations.
///
/// The "MRU entry" is always the next eviction victim.
pub trait MruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the most recently used entry.
    fn pop_mru(&mut self) -> Option<(K, V)>;

    /// Returns the most recently used entry without touching it.
    fn peek_mru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used; `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` counted from the most recent end (0 = MRU).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
