//! MRU (Most Recently Used) cache replacement policy.
//!
//! When a full cache admits a new key it evicts the entry that was touched
//! **most** recently, the opposite of LRU. This suits scan-like workloads
//! where an item that was just used is the least likely to be used again
//! before the rest of the working set comes around.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                           MruCache<K, V> Layout                             │
//! │                                                                             │
//! │   ┌──────────────────────────────┐     ┌────────────────────────────────┐   │
//! │   │ map: FxHashMap<K, SlotId>    │     │ list: RecencyList<Entry<K, V>> │   │
//! │   │                              │     │   (nodes live in a SlotArena)  │   │
//! │   │  "page1" ─► id_0 ────────────┼────►│ id_0: { page1, v }             │   │
//! │   │  "page2" ─► id_2 ────────────┼────►│ id_2: { page2, v }             │   │
//! │   │  "page3" ─► id_1 ────────────┼────►│ id_1: { page3, v }             │   │
//! │   └──────────────────────────────┘     └────────────────────────────────┘   │
//! │                                                                             │
//! │   front (least recent, KEEP)                       back (most recent, EVICT)│
//! │     [id_0] ◄──────────► [id_2] ◄──────────► [id_1]                          │
//! │                                                                             │
//! │   • New keys are appended at the back                                      │
//! │   • Hits and updates move the key to the back                               │
//! │   • A full cache evicts the back before appending                           │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation      | Time   | Touches recency | Notes                          |
//! |----------------|--------|-----------------|--------------------------------|
//! | `contains`     | O(1)   | no              |                                |
//! | `peek`         | O(1)   | no              |                                |
//! | `try_get`      | O(1)   | on hit          | `None` on miss                 |
//! | `get`          | O(1)   | on hit          | `Err(KeyNotFound)` on miss     |
//! | `insert`       | O(1)   | yes             | may evict the current MRU      |
//! | `remove`       | O(1)   | -               | no-op when absent              |
//! | `pop_mru`      | O(1)   | -               | removes the next victim        |
//! | `recency_rank` | O(n)   | no              | scans from the back            |
//! | `clear`        | O(n)   | -               | capacity unchanged             |
//!
//! Failed lookups never change recency.
//!
//! ## Example Usage
//!
//! ```
//! use mrucache::policy::mru::MruCache;
//!
//! let mut cache = MruCache::new(2);
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//!
//! // 2 was touched last, so it makes room for 3
//! cache.insert(3, "three");
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//!
//! // A hit makes 1 the next victim
//! assert_eq!(cache.try_get(&1), Some(&"one"));
//! cache.insert(4, "four");
//! assert!(!cache.contains(&1));
//! assert!(cache.contains(&3));
//! ```
//!
//! ## Thread Safety
//!
//! Not synchronized. `MruCache` is `Send + Sync` whenever `K` and `V` are,
//! with or without the `metrics` feature, so it can sit behind a `Mutex` or
//! `RwLock`.

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, MruMetricsReadRecorder, MruMetricsRecorder,
};
use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::{CacheError, ConfigError, InvariantError};
use crate::traits::{CoreCache, MruCacheTrait, MutableCache, ReadOnlyCache};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity cache that evicts the most recently used entry.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash` (stored in both the index
///   and the entry)
/// - `V`: Value type, unconstrained
///
/// # Example
///
/// ```
/// use mrucache::policy::mru::MruCache;
///
/// let mut cache = MruCache::new(100);
/// cache.insert("key1", "value1");
/// assert!(cache.contains(&"key1"));
///
/// // Update in place: same size, key becomes most recent
/// assert_eq!(cache.insert("key1", "new_value"), Some("value1"));
/// assert_eq!(cache.len(), 1);
/// assert_eq!(cache.get(&"key1"), Ok(&"new_value"));
/// ```
pub struct MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    map: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,

    #[cfg(feature = "metrics")]
    metrics: MruMetrics,
}

impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let cache: MruCache<String, i32> = MruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty cache, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_options(capacity, true)
    }

    /// Shared constructor; `preallocate` reserves index and arena storage
    /// for the full capacity up front.
    pub(crate) fn with_options(capacity: usize, preallocate: bool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        let (map, list) = if preallocate {
            (
                FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                RecencyList::with_capacity(capacity),
            )
        } else {
            (FxHashMap::default(), RecencyList::new())
        };
        Ok(Self {
            map,
            list,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: MruMetrics::default(),
        })
    }

    /// Number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is resident. Does not touch recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Looks up `key` without touching recency.
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(2);
    /// cache.insert("a", 1);
    /// cache.insert("b", 2);
    ///
    /// // peek leaves "b" as the most recent entry
    /// assert_eq!(cache.peek(&"a"), Some(&1));
    /// cache.insert("c", 3);
    /// assert!(cache.contains(&"a"));
    /// assert!(!cache.contains(&"b"));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.map.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Looks up `key`, making it the most recently used entry on a hit.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(100);
    /// cache.insert("key", 42);
    ///
    /// assert_eq!(cache.try_get(&"key"), Some(&42));
    /// assert_eq!(cache.try_get(&"missing"), None);
    /// ```
    #[inline]
    pub fn try_get(&mut self, key: &K) -> Option<&V> {
        let id = self.touch_id(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Mutable variant of [`try_get`](Self::try_get).
    #[inline]
    pub fn try_get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.touch_id(key)?;
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Looks up `key`, making it the most recently used entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyNotFound`] if `key` is not resident; the
    /// recency order is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use mrucache::error::CacheError;
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(4);
    /// cache.insert(1, "one".to_string());
    ///
    /// assert_eq!(cache.get(&1).map(String::as_str), Ok("one"));
    /// assert_eq!(cache.get(&2), Err(CacheError::KeyNotFound));
    /// ```
    #[inline]
    pub fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        self.try_get(key).ok_or(CacheError::KeyNotFound)
    }

    /// Inserts or updates `key` and makes it the most recently used entry.
    ///
    /// - Present key: the value is replaced and the old one returned. Size is
    ///   unchanged and nothing is evicted.
    /// - New key, room left: appended.
    /// - New key, cache full: the current most recently used entry is
    ///   evicted first.
    ///
    /// O(1) in all builds; debug builds only check constant-time facts here.
    /// Use [`check_invariants`](Self::check_invariants) for a full walk.
    ///
    /// # Example
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(2);
    /// assert_eq!(cache.insert("a", 1), None);
    /// assert_eq!(cache.insert("a", 10), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.map.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.list.move_to_back(id);
            let old = self
                .list
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            debug_assert!(old.is_some(), "index points at a vacant slot");
            return old;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if self.evict_mru().is_some() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.list.push_back(Entry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_check_appended(id);
        None
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(4);
    /// cache.insert("a", 1);
    /// assert_eq!(cache.remove(&"a"), Some(1));
    /// assert_eq!(cache.remove(&"a"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.map.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    /// Marks `key` as most recently used without reading it.
    ///
    /// Returns `false` if `key` is absent.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.map.get(key) else {
            return false;
        };
        self.list.move_to_back(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();
        true
    }

    /// Returns the most recently used entry, i.e. the next eviction victim.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_mru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_mru_found();
        Some((&entry.key, &entry.value))
    }

    /// Removes and returns the most recently used entry.
    pub fn pop_mru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_mru_call();

        let popped = self.evict_mru()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_mru_found();
        Some(popped)
    }

    /// Distance of `key` from the most recent end (0 = most recently used).
    ///
    /// Scans the recency list, so this is O(n).
    ///
    /// ```
    /// use mrucache::policy::mru::MruCache;
    ///
    /// let mut cache = MruCache::new(3);
    /// cache.insert("a", 1);
    /// cache.insert("b", 2);
    /// cache.insert("c", 3);
    /// assert_eq!(cache.recency_rank(&"c"), Some(0));
    /// assert_eq!(cache.recency_rank(&"a"), Some(2));
    /// assert_eq!(cache.recency_rank(&"z"), None);
    /// ```
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        if !self.map.contains_key(key) {
            return None;
        }
        for (rank, entry) in self.list.iter().rev().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if entry.key == *key {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    /// Iterates entries from least recently used to most recently used.
    ///
    /// Use `.rev()` to visit them in eviction order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Keys from least recently used to most recently used.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.map.clear();
        self.list.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Approximate memory footprint in bytes, excluding heap data owned by
    /// keys and values.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.map.capacity() * (std::mem::size_of::<K>() + std::mem::size_of::<SlotId>())
            + self.list.approx_bytes()
    }

    /// Verifies that the index and recency list describe the same entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] naming the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.map.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {}",
                self.map.len(),
                self.list.len()
            )));
        }
        if self.map.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.map.len(),
                self.capacity
            )));
        }
        for (key, &id) in &self.map {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "slot {} holds a different key than the index",
                        id.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index points at vacant slot {}",
                        id.index()
                    )));
                },
            }
        }
        Ok(())
    }

    /// Moves a resident key to the back and returns its slot.
    #[inline]
    fn touch_id(&mut self, key: &K) -> Option<SlotId> {
        let Some(&id) = self.map.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_back(id);
        Some(id)
    }

    /// Drops the back of the recency list from both structures.
    #[inline]
    fn evict_mru(&mut self) -> Option<(K, V)> {
        let Entry { key, value } = self.list.pop_back()?;
        self.map.remove(&key);
        Some((key, value))
    }

    /// Constant-time checks after appending `id`.
    #[cfg(debug_assertions)]
    fn debug_check_appended(&self, id: SlotId) {
        debug_assert_eq!(
            self.map.len(),
            self.list.len(),
            "index and recency list sizes diverged"
        );
        debug_assert!(self.map.len() <= self.capacity, "len exceeds capacity");
        debug_assert_eq!(
            self.list.back_id(),
            Some(id),
            "appended entry is not the most recent"
        );
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("MruCache invariant violated: {}", e);
        }
    }
}

impl<K, V> std::fmt::Debug for MruCache<K, V>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("mru", &self.list.back().map(|entry| &entry.key))
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> ReadOnlyCache<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        MruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        MruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// `CoreCache::get` maps to [`MruCache::try_get`]: a miss is `None`.
impl<K, V> CoreCache<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        MruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        MruCache::try_get(self, key)
    }

    fn clear(&mut self) {
        MruCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        MruCache::remove(self, key)
    }
}

impl<K, V> MruCacheTrait<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn pop_mru(&mut self) -> Option<(K, V)> {
        MruCache::pop_mru(self)
    }

    fn peek_mru(&self) -> Option<(&K, &V)> {
        MruCache::peek_mru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        MruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        MruCache::recency_rank(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Returns a snapshot of cache metrics.
    pub fn metrics_snapshot(&self) -> MruMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }

    /// Zeroes every counter without touching the cached entries.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<MruMetricsSnapshot> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> MruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// FixedMruCache
// ---------------------------------------------------------------------------

/// [`MruCache`] whose capacity is a compile-time constant.
///
/// `N == 0` fails to compile. Dereferences to [`MruCache`] for the full
/// API.
///
/// ```
/// use mrucache::policy::mru::FixedMruCache;
///
/// let mut cache: FixedMruCache<u32, &str, 2> = FixedMruCache::new();
/// cache.insert(1, "one");
/// cache.insert(2, "two");
/// cache.insert(3, "three");
/// assert_eq!(cache.capacity(), 2);
/// assert!(!cache.contains(&2));
/// ```
pub struct FixedMruCache<K, V, const N: usize>
where
    K: Clone + Eq + Hash,
{
    inner: MruCache<K, V>,
}

impl<K, V, const N: usize> FixedMruCache<K, V, N>
where
    K: Clone + Eq + Hash,
{
    const NON_ZERO: () = assert!(N > 0, "FixedMruCache capacity must be greater than zero");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self {
            inner: MruCache::new(N),
        }
    }

    /// Unwraps into the runtime-capacity cache.
    pub fn into_inner(self) -> MruCache<K, V> {
        self.inner
    }
}

impl<K, V, const N: usize> Default for FixedMruCache<K, V, N>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, const N: usize> Deref for FixedMruCache<K, V, N>
where
    K: Clone + Eq + Hash,
{
    type Target = MruCache<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V, const N: usize> DerefMut for FixedMruCache<K, V, N>
where
    K: Clone + Eq + Hash,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<K, V, const N: usize> std::fmt::Debug for FixedMruCache<K, V, N>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FixedMruCache").field(&self.inner).finish()
    }
}
