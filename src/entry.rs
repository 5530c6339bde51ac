//! Recency List Entry
//!
//! An [`Entry`] is one cached key/value pair plus the two links that place it
//! in the recency ordering. Links are slot indices into the owning
//! [`RecencyList`](crate::list::RecencyList) arena rather than references, so
//! an entry can be moved around the ordering without any aliasing.
//!
//! Entries have no behavior of their own. They are created by
//! [`LruCache`](crate::LruCache) on a miss, relinked by the list on every
//! access, and handed back by value when evicted or removed.

use core::fmt;

/// A cached key/value pair and its position in the recency ordering.
pub(crate) struct Entry<K, V> {
    /// The cached key. Also stored in the cache index.
    pub(crate) key: K,

    /// The cached value.
    pub(crate) value: V,

    /// Slot of the next more recently used entry, `None` at the head.
    pub(crate) prev: Option<usize>,

    /// Slot of the next less recently used entry, `None` at the tail.
    pub(crate) next: Option<usize>,
}

impl<K, V> Entry<K, V> {
    /// Creates an unlinked entry.
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Returns `true` if neither link is set.
    #[inline]
    pub(crate) fn is_unlinked(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// Consumes the entry and returns its key and value.
    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_new_entry_is_unlinked() {
        let entry = Entry::new("key", 42);
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, 42);
        assert!(entry.is_unlinked());
    }

    #[test]
    fn test_linked_entry() {
        let mut entry = Entry::new(1u32, String::from("one"));
        entry.next = Some(3);
        assert!(!entry.is_unlinked());
        entry.next = None;
        entry.prev = Some(0);
        assert!(!entry.is_unlinked());
    }

    #[test]
    fn test_into_pair() {
        let entry = Entry::new(String::from("apple"), 7u64);
        let (key, value) = entry.into_pair();
        assert_eq!(key, "apple");
        assert_eq!(value, 7);
    }
}
