//! Property tests: the cache is checked against a plain `Vec` model that keeps
//! keys in most-recently-used-first order and evicts from the back.

use lru_arena::LruCache;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Set(u8, u16),
    Remove(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so hits, updates and evictions all happen often
    prop_oneof![
        3 => (0u8..16).prop_map(Op::Get),
        4 => (0u8..16, any::<u16>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => (0u8..16).prop_map(Op::Remove),
    ]
}

/// Reference model, MRU first.
#[derive(Debug, Default)]
struct Model {
    entries: Vec<(u8, u16)>,
    cap: usize,
}

impl Model {
    fn get(&mut self, key: u8) -> Option<u16> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn set(&mut self, key: u8, value: u16) -> Option<(u8, u16)> {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return None;
        }
        let evicted = if self.entries.len() == self.cap {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn remove(&mut self, key: u8) -> Option<u16> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }
}

proptest! {
    #[test]
    fn prop_matches_reference_model(
        cap in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut cache = LruCache::new(cap).unwrap();
        let mut model = Model { cap, ..Model::default() };

        for op in ops {
            match op {
                Op::Get(k) => {
                    prop_assert_eq!(cache.get(&k).copied(), model.get(k));
                }
                Op::Set(k, v) => {
                    prop_assert_eq!(cache.put(k, v), model.set(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(cache.remove(&k), model.remove(k));
                }
            }
            let order: Vec<(u8, u16)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&order, &model.entries);
        }
    }

    #[test]
    fn prop_size_never_exceeds_capacity(
        cap in 1usize..10,
        keys in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut cache = LruCache::new(cap).unwrap();
        for key in keys {
            cache.set(key, ());
            prop_assert!(cache.len() <= cap);
        }
    }

    #[test]
    fn prop_get_after_set_returns_value(
        cap in 1usize..10,
        prefix in prop::collection::vec((any::<u8>(), any::<u32>()), 0..50),
        key in any::<u8>(),
        value in any::<u32>(),
    ) {
        let mut cache = LruCache::new(cap).unwrap();
        for (k, v) in prefix {
            cache.set(k, v);
        }
        cache.set(key, value);
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    #[test]
    fn prop_update_does_not_consume_capacity(
        cap in 1usize..10,
        keys in prop::collection::vec(any::<u8>(), 1..40),
        value in any::<u32>(),
    ) {
        let mut cache = LruCache::new(cap).unwrap();
        for &k in &keys {
            cache.set(k, 0u32);
        }
        let before: Vec<u8> = cache.iter().map(|(k, _)| *k).collect();
        let len = cache.len();
        for &k in &before {
            prop_assert_eq!(cache.put(k, value), None);
        }
        prop_assert_eq!(cache.len(), len);
    }

    #[test]
    fn prop_double_get_equals_single_get(
        keys in prop::collection::vec(0u8..8, 1..30),
        probe in 0u8..8,
    ) {
        let mut once = LruCache::new(4).unwrap();
        let mut twice = LruCache::new(4).unwrap();
        for &k in &keys {
            once.set(k, k);
            twice.set(k, k);
        }
        let first = once.get(&probe).copied();
        prop_assert_eq!(twice.get(&probe).copied(), first);
        prop_assert_eq!(twice.get(&probe).copied(), first);

        let a: Vec<u8> = once.iter().map(|(k, _)| *k).collect();
        let b: Vec<u8> = twice.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_non_positive_capacity_rejected(cap in i64::MIN..=0) {
        prop_assert!(LruCache::<u8, u8>::new(cap).is_err());
    }
}
