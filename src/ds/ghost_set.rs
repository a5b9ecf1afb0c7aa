//! Key-only ordered set for ghost bookkeeping.
//!
//! The adaptive engine remembers recently evicted keys without their
//! values. A `GhostSet` is an `FxHashMap` index over an [`IntrusiveList`]
//! of bare keys, ordered oldest to newest, so membership checks are O(1)
//! and trimming always discards the oldest ghost first.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;

#[derive(Debug)]
pub struct GhostSet<K> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<K>,
}

impl<K: Eq + Hash + Clone> GhostSet<K> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            list: IntrusiveList::new(),
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

    /// Records `key` as the newest ghost. Returns `false` if it was
    /// already present (its position is left unchanged).
    pub fn insert(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let id = self.list.push_back(key.clone());
        self.index.insert(key, id);
        true
    }

    /// Forgets `key`; returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => self.list.remove(id).is_some(),
            None => false,
        }
    }

    /// Forgets and returns the oldest ghost.
    pub fn pop_oldest(&mut self) -> Option<K> {
        let key = self.list.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.index.len(), self.list.len());
        for (key, &id) in &self.index {
            let node = self.list.get(id).expect("indexed ghost missing");
            assert!(node == key);
        }
        self.list.debug_validate_invariants();
    }
}

impl<K: Eq + Hash + Clone> Default for GhostSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_contains_remove() {
        let mut ghosts = GhostSet::new();
        assert!(ghosts.insert("a"));
        assert!(ghosts.insert("b"));
        assert!(!ghosts.insert("a"));
        assert_eq!(ghosts.len(), 2);
        assert!(ghosts.contains(&"a"));

        assert!(ghosts.remove(&"a"));
        assert!(!ghosts.remove(&"a"));
        assert!(!ghosts.contains(&"a"));
        ghosts.debug_validate_invariants();
    }

    #[test]
    fn pop_oldest_is_fifo() {
        let mut ghosts = GhostSet::new();
        ghosts.insert(1);
        ghosts.insert(2);
        ghosts.insert(3);

        assert_eq!(ghosts.pop_oldest(), Some(1));
        assert_eq!(ghosts.pop_oldest(), Some(2));

        ghosts.insert(4);
        assert_eq!(ghosts.pop_oldest(), Some(3));
        assert_eq!(ghosts.pop_oldest(), Some(4));
        assert_eq!(ghosts.pop_oldest(), None);
        assert!(ghosts.is_empty());
        ghosts.debug_validate_invariants();
    }

    #[test]
    fn reinsert_after_remove_lands_at_newest() {
        let mut ghosts = GhostSet::new();
        ghosts.insert("a");
        ghosts.insert("b");
        assert!(ghosts.remove(&"a"));
        assert!(ghosts.insert("a"));
        assert_eq!(ghosts.pop_oldest(), Some("b"));
        assert_eq!(ghosts.pop_oldest(), Some("a"));
        ghosts.debug_validate_invariants();
    }

    #[test]
    fn clear_resets() {
        let mut ghosts = GhostSet::new();
        ghosts.insert(1);
        ghosts.insert(2);
        ghosts.clear();
        assert!(ghosts.is_empty());
        assert!(!ghosts.contains(&1));
        assert_eq!(ghosts.pop_oldest(), None);
        ghosts.debug_validate_invariants();
    }
}
