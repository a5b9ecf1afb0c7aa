//! Hash index over an insertion-ordered list.
//!
//! Pairs an `FxHashMap<K, SlotId>` with an [`IntrusiveList`] of `(K, V)`
//! nodes. The list runs oldest to newest, front to back:
//!
//! ```text
//!   index: { k ─► SlotId }          list (IntrusiveList<(K, V)>)
//!   ┌──────┬────────┐       front ─► (k1, v1)   oldest
//!   │  k1  │  id_1  │                (k2, v2)
//!   │  k2  │  id_2  │                (k3, v3)
//!   │  k3  │  id_3  │        back ─► (k3, v3)   newest
//!   └──────┴────────┘
//! ```
//!
//! This is the backbone of the FIFO, LRU, and TTL engines and of the two
//! resident lists inside ARC. Each policy picks the subset it needs:
//! FIFO never touches, LRU touches on every hit, ARC moves entries between
//! two of these maps. All operations are O(1) expected.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;

#[derive(Debug)]
pub struct OrderedMap<K, V> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            list: IntrusiveList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            index,
            list: IntrusiveList::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        self.list.get_mut(id).map(|(_, value)| value)
    }

    /// Inserts or replaces the value for `key`, returning the previous
    /// value if any. A new key lands at the back (newest); replacing an
    /// existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&id) => self
                .list
                .get_mut(id)
                .map(|node| std::mem::replace(&mut node.1, value)),
            None => {
                let id = self.list.push_back((key.clone(), value));
                self.index.insert(key, id);
                None
            }
        }
    }

    /// Moves `key` to the back (newest); returns `false` if absent.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_back(id),
            None => false,
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|(_, value)| value)
    }

    /// Returns the oldest entry without removing it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.list.front().map(|(key, value)| (key, value))
    }

    /// Removes and returns the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_front()?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Iterates entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|(key, value)| (key, value))
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.index.len(), self.list.len());
        for (key, &id) in &self.index {
            let node = self.list.get(id).expect("indexed node missing");
            assert!(&node.0 == key);
        }
        self.list.debug_validate_invariants();
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
