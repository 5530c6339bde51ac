//! A bounded least-recently-used cache with O(1) `get` and `set`.
//!
//! ---
//!
//! # Overview
//!
//! [`LruCache`] holds at most `capacity` key/value pairs. Every `get` hit and
//! every `set` marks the entry most recently used; inserting a new key into a
//! full cache evicts the entry that was used least recently.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                            LruCache                               │
//! │                                                                   │
//! │   index: HashMap<K, slot>          RecencyList (arena of slots)   │
//! │   ┌─────────┬──────┐                                              │
//! │   │ "a"     │  2   │──────▶  head ─▶ [2] ⇄ [0] ⇄ [3] ⇄ [1] ◀─ tail │
//! │   │ "b"     │  0   │                  MRU               LRU       │
//! │   │ "c"     │  3   │                                              │
//! │   │ "d"     │  1   │         free: [ ]  (slots released by        │
//! │   └─────────┴──────┘                    eviction, reused first)   │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list links entries by slot index instead of pointer, so the crate
//! contains no `unsafe` code.
//!
//! ## Quick Start
//!
//! ```rust
//! use lru_arena::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.set("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Construction
//!
//! Capacity must be positive. [`LruCache::new`] accepts any integer type and
//! reports out-of-range values as [`CacheError::InvalidArgument`]:
//!
//! ```rust
//! use lru_arena::{CacheError, LruCache};
//!
//! assert!(matches!(
//!     LruCache::<u32, u32>::new(-1),
//!     Err(CacheError::InvalidArgument(_))
//! ));
//! ```
//!
//! When the capacity is already known to be valid, build from a
//! [`LruCacheConfig`](config::LruCacheConfig) instead:
//!
//! ```rust
//! use lru_arena::config::LruCacheConfig;
//! use lru_arena::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Allocates |
//! |-----------|------|-----------|
//! | `get`     | O(1) | never |
//! | `set` (update) | O(1) | never |
//! | `set` (insert) | O(1) amortized | only while the arena is filling |
//! | `remove`  | O(1) | never |
//!
//! ## Concurrency
//!
//! The cache is single-threaded. `get` reorders entries and therefore takes
//! `&mut self`; share it across threads behind one `Mutex`, or shard the key
//! space over several independently locked caches.
//!
//! ## Modules
//!
//! - [`lru`]: the cache itself
//! - [`config`]: construction parameters
//! - [`error`]: construction errors
//! - [`metrics`]: hit/miss/eviction counters

#![no_std]

extern crate alloc;

#[cfg(not(feature = "hashbrown"))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Cache entry: one key/value pair plus its links in the recency ordering.
pub(crate) mod entry;

/// Arena-backed doubly linked list tracking recency of use.
///
/// **Note**: This module is internal infrastructure. Slot indices are only
/// meaningful to the list that issued them; use [`LruCache`] instead.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry when
/// a new key is inserted at capacity.
pub mod lru;

/// Cache metrics.
///
/// Counts requests, hits, misses, insertions, updates and evictions.
pub mod metrics;

pub use config::LruCacheConfig;
pub use error::{CacheError, Result};
pub use lru::LruCache;
pub use metrics::{CacheMetrics, LruCacheMetrics};
