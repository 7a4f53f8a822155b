pub use crate::builder::MruCacheBuilder;
pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{CacheError, ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::MruMetricsSnapshot;
pub use crate::policy::mru::{FixedMruCache, MruCache};
pub use crate::traits::{CoreCache, MruCacheTrait, MutableCache, ReadOnlyCache};
