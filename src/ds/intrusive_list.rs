//! Intrusive doubly linked list backed by [`SlotArena`].
//!
//! Nodes live in the arena and link to each other by `SlotId`, so an engine
//! can hold a hash map from key to `SlotId` and splice nodes in O(1)
//! without pointer chasing or unsafe code.
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! The LFU engine keeps this list sorted by ascending access count, head
//! first. Besides the usual push/pop/move-to-end operations that supports
//! two extras:
//!
//! - `prev_id(id)`: step one node toward the head
//! - `move_after(id, anchor)`: splice `id` directly behind `anchor`
//!   (`None` means move to the front)
//!
//! All splice operations are O(1). `debug_validate_invariants()` walks the
//! links in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    /// Returns the `SlotId` at the front of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    /// Returns the `SlotId` at the back of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the `SlotId` of the node before `id`, or `None` if `id` is
    /// the head or not present.
    pub fn prev_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id)?.prev
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns an iterator of values from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.attach_front(id);
        id
    }

    /// Inserts a new node at the back and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.attach_back(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not
    /// present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.detach(id);
            self.attach_front(id);
        }
        true
    }

    /// Moves an existing node to the back; returns `false` if `id` is not
    /// present.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.tail != Some(id) {
            self.detach(id);
            self.attach_back(id);
        }
        true
    }

    /// Splices `id` so that it sits directly after `anchor`, or at the
    /// front when `anchor` is `None`. Returns `false` if `id` or `anchor`
    /// is not present. `anchor == id` leaves the list unchanged.
    pub fn move_after(&mut self, id: SlotId, anchor: Option<SlotId>) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        match anchor {
            None => self.move_to_front(id),
            Some(anchor) if anchor == id => true,
            Some(anchor) => {
                if !self.arena.contains(anchor) {
                    return false;
                }
                self.detach(id);
                self.attach_after(id, anchor);
                true
            }
        }
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(old_head) => {
                if let Some(head_node) = self.arena.get_mut(old_head) {
                    head_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(old_tail) => {
                if let Some(tail_node) = self.arena.get_mut(old_tail) {
                    tail_node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn attach_after(&mut self, id: SlotId, anchor: SlotId) {
        let anchor_next = match self.arena.get(anchor) {
            Some(node) => node.next,
            None => return,
        };
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = Some(anchor);
            node.next = anchor_next;
        }
        if let Some(anchor_node) = self.arena.get_mut(anchor) {
            anchor_node.next = Some(id);
        }
        match anchor_next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let node = self.arena.get(id).expect("node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_and_remove() {
        let mut list = IntrusiveList::new();
        let a = list.push_front("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert!(list.is_empty());
        assert!(!list.contains(a));
        assert!(!list.contains(c));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_and_back() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_front(c));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["c", "a", "b"]);

        assert!(list.move_to_back(c));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "b", "c"]);

        // Already at the ends: no-ops.
        assert!(list.move_to_front(a));
        assert!(list.move_to_back(c));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "b", "c"]);

        let _ = b;
        list.debug_validate_invariants();
    }

    #[test]
    fn prev_id_walks_toward_head() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);

        assert_eq!(list.prev_id(c), Some(b));
        assert_eq!(list.prev_id(b), Some(a));
        assert_eq!(list.prev_id(a), None);

        list.remove(b);
        assert_eq!(list.prev_id(c), Some(a));
        assert_eq!(list.prev_id(b), None);
    }

    #[test]
    fn move_after_splices_behind_anchor() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");
        let d = list.push_back("d");

        assert!(list.move_after(a, Some(c)));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "c", "a", "d"]);

        assert!(list.move_after(d, None));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["d", "b", "c", "a"]);

        // Anchor at tail: node becomes the new tail.
        assert!(list.move_after(d, Some(a)));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "c", "a", "d"]);
        assert_eq!(list.back_id(), Some(d));

        // Self-anchor is a no-op.
        assert!(list.move_after(b, Some(b)));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "c", "a", "d"]);

        list.debug_validate_invariants();
    }

    #[test]
    fn stale_ids_are_rejected() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        list.remove(a);

        assert!(!list.move_to_front(a));
        assert!(!list.move_to_back(a));
        assert!(!list.move_after(a, Some(b)));
        assert!(!list.move_after(b, Some(a)));
        assert_eq!(list.remove(a), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_state() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        list.debug_validate_invariants();
    }
}
