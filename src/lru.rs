//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a bounded LRU cache with O(1) operations for lookup,
//! insertion, update and eviction.
//!
//! # Algorithm
//!
//! The cache keeps its entries in order of recency of use and evicts the least
//! recently used entry when a new key arrives at full capacity. Both reads
//! (`get`) and writes (`set`) count as a use, which is what separates LRU from
//! FIFO: an old entry that keeps getting read stays in the cache.
//!
//! Two structures are kept in lockstep:
//!
//! - an index from key to arena slot, for O(1) lookup
//! - a [`RecencyList`] over the arena, for O(1) promotion and eviction
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Set: O(1) amortized (hash map insert)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache. The arena never grows past
//!     `capacity` slots; evicted slots are reused.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe: `get` promotes, so even reads need
//! `&mut self`. Wrap the whole cache in a single `Mutex`, or shard keys across
//! several independently locked caches.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::list::{self, RecencyList};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A bounded Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache is full, the
/// least recently used entry is evicted to make room for a new key.
///
/// # Examples
///
/// ```
/// use lru_arena::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.set("apple", 1);
/// cache.set("banana", 2);
///
/// // Reading "apple" makes "banana" the least recently used entry
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// cache.set("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: RecencyList<K, V>,
    map: HashMap<K, usize, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidArgument`](crate::CacheError::InvalidArgument)
    /// if `capacity` is zero, negative, or does not fit in `usize`.
    ///
    /// ```
    /// use lru_arena::{CacheError, LruCache};
    ///
    /// assert!(LruCache::<&str, i32>::new(1).is_ok());
    /// assert!(matches!(
    ///     LruCache::<&str, i32>::new(0),
    ///     Err(CacheError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn new<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let config = LruCacheConfig::new(capacity)?;
        Ok(Self::init(config, None))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache from a validated config and an optional hash builder.
    ///
    /// When `hasher` is `None`, `S::default()` is used.
    pub fn init(config: LruCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }

    /// Creates a cache from a validated config using `hash_builder` for the
    /// key index.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity;
        debug!(capacity = cap.get(), "created LRU cache");
        LruCache {
            config,
            list: RecencyList::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Maximum number of entries.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Counters for this cache's traffic so far.
    #[inline]
    pub fn stats(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the ordering untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(idx) = self.map.get(key).copied() else {
            self.metrics.record_miss();
            return None;
        };
        self.list.move_to_front(idx);
        self.metrics.record_hit();
        let entry = self.list.get(idx);
        debug_assert!(entry.is_some(), "index points at vacant slot {idx}");
        entry.map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(idx) = self.map.get(key).copied() else {
            self.metrics.record_miss();
            return None;
        };
        self.list.move_to_front(idx);
        self.metrics.record_hit();
        let entry = self.list.get_mut(idx);
        debug_assert!(entry.is_some(), "index points at vacant slot {idx}");
        entry.map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.list.get(idx).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached. Does not change its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the least recently used entry without removing or promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let entry = self.list.get(self.list.back()?)?;
        Some((&entry.key, &entry.value))
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.remove(key)?;
        self.list.remove(idx).map(|entry| entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.remove_from_tail()?;
        self.map.remove(&entry.key);
        Some(entry.into_pair())
    }

    /// Drops every entry. Capacity and metrics are kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.map.len(), "clearing LRU cache");
        self.map.clear();
        self.list.clear();
    }

    /// Iterates from most to least recently used without promoting anything.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// If `key` is already cached its value is replaced in place and the
    /// size does not change. Otherwise, if the cache is full, the least
    /// recently used entry is evicted first.
    pub fn set(&mut self, key: K, value: V) {
        self.put(key, value);
    }

    /// Same as [`set`](Self::set), but returns the entry evicted to make
    /// room, if any.
    ///
    /// Replacing the value of a key that is already cached never evicts and
    /// returns `None`.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(idx) = self.map.get(&key).copied() {
            let entry = self.list.get_mut(idx);
            debug_assert!(entry.is_some(), "index points at vacant slot {idx}");
            if let Some(entry) = entry {
                entry.value = value;
            }
            self.list.move_to_front(idx);
            self.metrics.record_update();
            return None;
        }

        let evicted = if self.map.len() >= self.cap().get() {
            Some(self.evict())
        } else {
            None
        };

        let idx = self.list.append_to_front(Entry::new(key.clone(), value));
        self.map.insert(key, idx);
        self.metrics.record_insertion();
        debug_assert!(self.list.slot_count() <= self.cap().get());
        debug_assert_eq!(self.map.len(), self.list.len());

        evicted
    }

    fn evict(&mut self) -> (K, V) {
        let Some(entry) = self.list.remove_from_tail() else {
            panic!(
                "LRU list is empty while the index holds {} of {} keys",
                self.map.len(),
                self.cap()
            );
        };
        self.map.remove(&entry.key);
        self.metrics.record_eviction();
        trace!(len = self.map.len(), "evicted least recently used entry");
        entry.into_pair()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
