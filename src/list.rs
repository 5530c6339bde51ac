//! Arena-backed doubly linked recency list.
//!
//! Entries live in a dense `Vec` of slots and link to each other by slot
//! index. Slots released by eviction or removal go onto a free list and are
//! reused by the next insertion, so the arena never holds more slots than the
//! largest number of entries it has held at once.
//!
//! ```text
//!  head (MRU)                                   tail (LRU)
//!     │                                             │
//!     ▼                                             ▼
//!  ┌──────┐ next ┌──────┐ next ┌──────┐ next ┌──────┐
//!  │slot 2│─────▶│slot 0│─────▶│slot 3│─────▶│slot 1│
//!  │      │◀─────│      │◀─────│      │◀─────│      │
//!  └──────┘ prev └──────┘ prev └──────┘ prev └──────┘
//! ```
//!
//! All operations are O(1). Promotion and eviction never allocate; insertion
//! only allocates while the arena is still growing toward the capacity it was
//! created with.

extern crate alloc;

use crate::entry::Entry;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::num::NonZeroUsize;

/// One arena cell.
enum Slot<K, V> {
    Occupied(Entry<K, V>),
    Vacant,
}

/// A doubly linked ordering of entries from most recently used (head) to
/// least recently used (tail).
///
/// This structure is not meant to be used directly by users of the crate.
/// Slot indices it returns stay valid until the entry at that slot is
/// removed; after that the slot may be reused by another entry.
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Creates an empty list with room for `cap` entries.
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        RecencyList {
            slots: Vec::with_capacity(cap.get()),
            free: Vec::with_capacity(cap.get()),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot of the most recently used entry.
    #[inline]
    pub(crate) fn front(&self) -> Option<usize> {
        self.head
    }

    /// Slot of the least recently used entry.
    #[inline]
    pub(crate) fn back(&self) -> Option<usize> {
        self.tail
    }

    /// Number of arena slots, occupied or vacant.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&Entry<K, V>> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<K, V>> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Stores a fresh entry and links it as the new head.
    ///
    /// Returns the slot the entry was placed in.
    pub(crate) fn append_to_front(&mut self, entry: Entry<K, V>) -> usize {
        debug_assert!(entry.is_unlinked(), "appended entry is already linked");
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::Occupied(entry);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Promotes the entry at `idx` to the head.
    ///
    /// Does nothing if it is already the head or the slot is vacant.
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || self.get(idx).is_none() {
            return;
        }
        self.detach(idx);
        self.link_front(idx);
    }

    /// Unlinks and returns the least recently used entry.
    pub(crate) fn remove_from_tail(&mut self) -> Option<Entry<K, V>> {
        let idx = self.tail?;
        self.remove(idx)
    }

    /// Unlinks and returns the entry at `idx`, releasing its slot.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<Entry<K, V>> {
        self.get(idx)?;
        self.detach(idx);
        self.release(idx)
    }

    /// Drops every entry and resets the arena.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.front(),
            remaining: self.len,
        }
    }

    /// Unlinks `idx` from its neighbors, repairing `head`/`tail`, and clears
    /// its own links. The entry stays in its slot.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.get_mut(idx) {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(entry) = self.get_mut(p) {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(entry) = self.get_mut(n) {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Links the (unlinked) entry at `idx` in front of the current head.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.get_mut(idx) {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(entry) = self.get_mut(h) {
                entry.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Takes the entry out of `idx` and puts the slot on the free list.
    fn release(&mut self, idx: usize) -> Option<Entry<K, V>> {
        let slot = self.slots.get_mut(idx)?;
        match mem::replace(slot, Slot::Vacant) {
            Slot::Occupied(entry) => {
                self.free.push(idx);
                self.len -= 1;
                Some(entry)
            }
            Slot::Vacant => None,
        }
    }
}

impl<K, V> fmt::Debug for RecencyList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyList")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Iterator over a [`RecencyList`] from head to tail.
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let entry = self.list.get(idx)?;
        self.next = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
