//! Cache Metrics
//!
//! Counters an [`LruCache`](crate::LruCache) keeps about its own traffic,
//! reported through the [`CacheMetrics`] trait as a `BTreeMap` so the output
//! order is stable across runs.
//!
//! ```
//! use lru_arena::metrics::CacheMetrics;
//! use lru_arena::LruCache;
//!
//! let mut cache = LruCache::new(1).unwrap();
//! cache.set("a", 1);
//! cache.get(&"a");
//! cache.get(&"b");
//! cache.set("b", 2);
//!
//! let metrics = cache.metrics();
//! assert_eq!(metrics["cache_hits"], 1.0);
//! assert_eq!(metrics["cache_misses"], 1.0);
//! assert_eq!(metrics["evictions"], 1.0);
//! assert_eq!(cache.algorithm_name(), "LRU");
//! ```

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by an LRU cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Total number of `get` calls.
    pub requests: u64,

    /// `get` calls that found the key.
    pub cache_hits: u64,

    /// New keys stored.
    pub insertions: u64,

    /// Writes to a key that was already present.
    pub updates: u64,

    /// Entries removed to make room for a new key.
    pub evictions: u64,
}

impl LruCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.requests += 1;
    }

    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// `get` calls that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of requests that hit, 0.0 when there were none.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of requests that missed, 0.0 when there were none.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a map keyed by metric name.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting.
pub trait CacheMetrics {
    /// Returns all metrics as name/value pairs in sorted key order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short identifier of the eviction policy, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
