//! Least frequently used cache.
//!
//! ## Architecture
//!
//! An `FxHashMap<K, SlotId>` index over a single [`IntrusiveList`] whose
//! nodes carry `{key, value, count}`, kept sorted by ascending count with
//! the front as the global eviction candidate:
//!
//! ```text
//!   index: { k ─► SlotId }     order (ascending count)
//!
//!   front ─► [c: 1] ◄──► [b: 2] ◄──► [a: 3] ◄── back
//!            evict                     hottest
//!            next
//! ```
//!
//! ## Reposition
//!
//! A touch bumps the node's count and splices it back into sorted position:
//! scan backward from the tail, skip nodes whose count is strictly greater,
//! and land directly behind the first node whose count fits (or at the
//! front if none does). Among equal counts the most recently touched node
//! sits closest to the tail, so the front is always the least frequently
//! used entry, ties broken toward the one touched longest ago.
//!
//! A brand-new entry starts at count 1 and is placed by the same tie rule,
//! behind any older count-1 entries. Overflow then pops the front, which is
//! the true global minimum rather than the entry just inserted.
//!
//! Reposition cost is proportional to the distance scanned; eviction stays
//! O(1). Workloads with heavy count ties pay the scan on the tied range.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::bounds::{validate_max, Bound, BoundError};
use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::ConfigError;
use crate::traits::Cache;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    count: u64,
}

/// LFU cache: evicts the entry with the lowest access count.
///
/// # Example
///
/// ```
/// use evictkit::policy::lfu::LfuCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = LfuCache::try_new(3).unwrap();
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3);
///
/// // Build up counts: a=3, b=2, c=1.
/// cache.get(&"a");
/// cache.get(&"a");
/// cache.get(&"b");
///
/// cache.set("d", 4);
/// assert!(!cache.has(&"c"));
/// assert!(cache.has(&"a"));
/// ```
pub struct LfuCache<K, V> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K, V>>,
    max: Bound,
}

impl<K: Eq + Hash + Clone, V> LfuCache<K, V> {
    /// Creates an LFU cache holding at most `max` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` is negative, NaN, or fractional.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::lfu::LfuCache;
    ///
    /// let err = LfuCache::<u64, u64>::try_new(-3i64).unwrap_err();
    /// assert!(err.to_string().contains("max"));
    /// ```
    pub fn try_new<B>(max: B) -> Result<Self, ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        let max = validate_max("LfuCache::try_new", max)?;
        Ok(Self {
            index: FxHashMap::default(),
            order: IntrusiveList::new(),
            max,
        })
    }

    /// Returns the configured capacity bound.
    pub fn max(&self) -> Bound {
        self.max
    }

    /// Returns the access count recorded for `key`, if present.
    ///
    /// An entry starts at 1 on insert; every `get` hit and every replacing
    /// `set` adds 1.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| entry.count)
    }

    /// Replaces the capacity bound, evicting lowest-count entries first if
    /// the cache now exceeds it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` fails validation; the cache is left
    /// unchanged.
    pub fn set_max<B>(&mut self, max: B) -> Result<(), ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        self.max = validate_max("LfuCache::set_max", max)?;
        while self.max.exceeded_by(self.index.len() as u64) {
            self.evict_front();
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Removes the front node, the global minimum-count entry.
    fn evict_front(&mut self) {
        if let Some(id) = self.order.front_id() {
            if let Some(entry) = self.order.remove(id) {
                self.index.remove(&entry.key);
            }
        }
    }

    /// Splices `id` back into count order after its count changed.
    ///
    /// Scans from the tail toward the head, skipping nodes with a strictly
    /// greater count, and lands behind the first node whose count is <= the
    /// node's own. Ties end up tail-most, so the front stays the entry
    /// touched longest ago among the minimum counts.
    fn reposition(&mut self, id: SlotId) {
        let count = match self.order.get(id) {
            Some(entry) => entry.count,
            None => return,
        };

        let mut anchor = self.order.back_id();
        while let Some(candidate) = anchor {
            if candidate != id {
                match self.order.get(candidate) {
                    Some(entry) if entry.count <= count => break,
                    _ => {}
                }
            }
            anchor = self.order.prev_id(candidate);
        }
        self.order.move_after(id, anchor);
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        assert_eq!(self.index.len(), self.order.len());
        let mut last_count = 0u64;
        for entry in self.order.iter() {
            assert!(entry.count >= last_count, "counts must ascend front to back");
            last_count = entry.count;
            assert!(self.index.contains_key(&entry.key));
        }
        self.order.debug_validate_invariants();
    }
}

impl<K: Eq + Hash + Clone, V> Cache<K, V> for LfuCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        if let Some(entry) = self.order.get_mut(id) {
            entry.count += 1;
        }
        self.reposition(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    fn set(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
                entry.count += 1;
            }
            self.reposition(id);
            return;
        }

        let id = self.order.push_back(Entry {
            key: key.clone(),
            value,
            count: 1,
        });
        self.index.insert(key, id);
        self.reposition(id);

        if self.max.exceeded_by(self.index.len() as u64) {
            self.evict_front();
        }
    }

    fn has(&mut self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn del(&mut self, key: &K) {
        if let Some(id) = self.index.remove(key) {
            self.order.remove(id);
        }
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for LfuCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("len", &self.index.len())
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
