//! Cache Configuration
//!
//! [`LruCacheConfig`] carries the parameters an [`LruCache`](crate::LruCache)
//! is built from. The capacity field is a `NonZeroUsize`, so a config that
//! exists is always valid; [`LruCacheConfig::new`] is the checked way to get
//! one from an arbitrary integer.
//!
//! # Examples
//!
//! ```
//! use lru_arena::config::LruCacheConfig;
//! use lru_arena::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Build the config directly from a known-good capacity
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Or validate a capacity that came from elsewhere
//! assert!(LruCacheConfig::new(-5).is_err());
//! ```

use crate::error::{CacheError, Result};
use core::fmt;
use core::num::NonZeroUsize;
use tracing::warn;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Inserting a
///   new key into a full cache evicts the least recently used entry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates `capacity` and builds a config from it.
    ///
    /// Accepts any integer type. Fails with [`CacheError::InvalidArgument`]
    /// if the value is zero, negative, or larger than `usize::MAX`.
    ///
    /// ```
    /// use lru_arena::config::LruCacheConfig;
    /// use lru_arena::CacheError;
    ///
    /// assert_eq!(LruCacheConfig::new(3).unwrap().capacity.get(), 3);
    /// assert!(matches!(LruCacheConfig::new(0), Err(CacheError::InvalidArgument(_))));
    /// assert!(matches!(LruCacheConfig::new(-1i64), Err(CacheError::InvalidArgument(_))));
    /// ```
    pub fn new<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let capacity = capacity
            .try_into()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                warn!("rejected non-positive cache capacity");
                CacheError::InvalidArgument("capacity must be a positive integer")
            })?;
        Ok(Self { capacity })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
