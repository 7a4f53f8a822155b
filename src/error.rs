//! Error types for the mrucache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by lookups that require the key to be present
//!   ([`MruCache::get`](crate::policy::mru::MruCache::get)).
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity).
//! - [`InvariantError`]: Returned when the index and the recency list
//!   disagree (`check_invariants`).
//!
//! ## Example Usage
//!
//! ```
//! use mrucache::error::{CacheError, ConfigError};
//! use mrucache::policy::mru::MruCache;
//!
//! // Zero capacity is rejected up front
//! let bad: Result<MruCache<u32, u32>, ConfigError> = MruCache::try_new(0);
//! assert!(bad.is_err());
//!
//! let mut cache = MruCache::try_new(4).unwrap();
//! cache.insert(1, "one");
//! assert_eq!(cache.get(&1), Ok(&"one"));
//! assert_eq!(cache.get(&2), Err(CacheError::KeyNotFound));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by cache operations that cannot complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CacheError {
    /// The requested key is not resident in the cache.
    KeyNotFound,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::KeyNotFound => f.write_str("key not found in cache"),
        }
    }
}

impl std::error::Error for CacheError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`MruCache::try_new`](crate::policy::mru::MruCache::try_new)
/// and [`MruCacheBuilder::try_build`](crate::builder::MruCacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use mrucache::policy::mru::MruCache;
///
/// let err = MruCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
