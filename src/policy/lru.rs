//! Least recently used cache.
//!
//! ## Architecture
//!
//! One [`OrderedMap`] where list position doubles as recency, oldest at the
//! front:
//!
//! ```text
//!   front ─► [b] ◄──► [c] ◄──► [a] ◄── back
//!            LRU                MRU
//!
//!   get(b):  move [b] to the back          (hit refreshes recency)
//!   set(d):  append [d], evict front [b]   (overflow evicts exactly one)
//! ```
//!
//! ## Operations
//!
//! | Operation | Effect on order | Evicts |
//! |-----------|-----------------|--------|
//! | `get` hit  | entry to newest | never |
//! | `set` new  | append at newest | oldest, if over bound |
//! | `set` replace | entry to newest | never |
//! | `has` / `del` | none | never |
//!
//! Hit/miss hooks are the observability seam: install them with
//! [`on_hit`](LruCache::on_hit) / [`on_miss`](LruCache::on_miss) to count or
//! log accesses without wrapping the cache.

use std::fmt;
use std::hash::Hash;

use crate::bounds::{validate_max, Bound, BoundError};
use crate::ds::ordered_map::OrderedMap;
use crate::error::ConfigError;
use crate::traits::Cache;

/// LRU cache: evicts the entry that has gone longest without access.
///
/// # Example
///
/// ```
/// use evictkit::policy::lru::LruCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = LruCache::try_new(3).unwrap();
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3);
///
/// // Touching "a" makes "b" the eviction candidate.
/// cache.get(&"a");
/// cache.set("d", 4);
///
/// assert!(cache.has(&"a"));
/// assert!(!cache.has(&"b"));
/// ```
pub struct LruCache<K, V> {
    entries: OrderedMap<K, V>,
    max: Bound,
    on_hit: Option<Box<dyn FnMut(&K)>>,
    on_miss: Option<Box<dyn FnMut(&K)>>,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    /// Creates an LRU cache holding at most `max` entries.
    ///
    /// Accepts any numeric bound: unsigned integers, non-negative signed
    /// integers, or `f64::INFINITY` for an unbounded cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` is negative, NaN, or fractional.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::lru::LruCache;
    /// use evictkit::prelude::Cache;
    ///
    /// let cache = LruCache::<u32, String>::try_new(100).unwrap();
    /// assert!(cache.is_empty());
    ///
    /// let err = LruCache::<u32, String>::try_new(-1i64).unwrap_err();
    /// assert!(err.to_string().contains("max"));
    /// ```
    pub fn try_new<B>(max: B) -> Result<Self, ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        let max = validate_max("LruCache::try_new", max)?;
        Ok(Self {
            entries: OrderedMap::new(),
            max,
            on_hit: None,
            on_miss: None,
        })
    }

    /// Installs a hook invoked on every `get` hit.
    pub fn on_hit(mut self, hook: impl FnMut(&K) + 'static) -> Self {
        self.on_hit = Some(Box::new(hook));
        self
    }

    /// Installs a hook invoked on every `get` miss.
    pub fn on_miss(mut self, hook: impl FnMut(&K) + 'static) -> Self {
        self.on_miss = Some(Box::new(hook));
        self
    }

    /// Returns the configured capacity bound.
    pub fn max(&self) -> Bound {
        self.max
    }

    /// Replaces the capacity bound. Shrinking below the current size evicts
    /// least recently used entries until the cache fits.
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
        self.max = validate_max("LruCache::set_max", max)?;
        while self.max.exceeded_by(self.entries.len() as u64) {
            self.entries.pop_oldest();
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash + Clone, V> Cache<K, V> for LruCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.touch(key) {
            if let Some(hook) = self.on_hit.as_mut() {
                hook(key);
            }
            self.entries.get(key)
        } else {
            if let Some(hook) = self.on_miss.as_mut() {
                hook(key);
            }
            None
        }
    }

    fn set(&mut self, key: K, value: V) {
        // Replacing counts as an access: the entry moves to newest either
        // way, and only a genuinely new key can trigger eviction.
        if self.entries.touch(&key) {
            self.entries.insert(key, value);
            return;
        }
        self.entries.insert(key, value);
        if self.max.exceeded_by(self.entries.len() as u64) {
            self.entries.pop_oldest();
        }
    }

    fn has(&mut self, key: &K) -> bool {
        self.entries.contains(key)
    }

    fn del(&mut self, key: &K) {
        self.entries.remove(key);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.entries.len())
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn round_trip() {
        let mut cache = LruCache::try_new(10).unwrap();
        cache.set(1, "one");
        assert_eq!(cache.get(&1), Some(&"one"));
        assert!(cache.has(&1));
        assert_eq!(cache.len(), 1);

        cache.del(&1);
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::try_new(3).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        cache.get(&"a");
        cache.set("d", 4);

        assert!(cache.has(&"a"));
        assert!(!cache.has(&"b"));
        assert!(cache.has(&"c"));
        assert!(cache.has(&"d"));
    }

    #[test]
    fn replace_refreshes_recency_without_evicting() {
        let mut cache = LruCache::try_new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 10);
        assert_eq!(cache.len(), 2);

        // "b" is now oldest.
        cache.set("c", 3);
        assert!(cache.has(&"a"));
        assert!(!cache.has(&"b"));
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn has_and_del_do_not_touch_recency() {
        let mut cache = LruCache::try_new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);

        // Membership checks leave "a" as the candidate.
        assert!(cache.has(&"a"));
        assert!(cache.has(&"a"));
        cache.set("c", 3);
        assert!(!cache.has(&"a"));
        assert!(cache.has(&"b"));
    }

    #[test]
    fn has_is_idempotent() {
        let mut cache = LruCache::try_new(5).unwrap();
        cache.set(1, "x");
        let first = cache.has(&1);
        let second = cache.has(&1);
        assert_eq!(first, second);
        assert!(first);

        assert_eq!(cache.has(&2), cache.has(&2));
    }

    #[test]
    fn hooks_count_hits_and_misses() {
        let hits = Rc::new(Cell::new(0u32));
        let misses = Rc::new(Cell::new(0u32));
        let hits2 = Rc::clone(&hits);
        let misses2 = Rc::clone(&misses);

        let mut cache = LruCache::try_new(10)
            .unwrap()
            .on_hit(move |_: &u32| hits2.set(hits2.get() + 1))
            .on_miss(move |_: &u32| misses2.set(misses2.get() + 1));

        cache.set(1, "a");
        cache.get(&1);
        cache.get(&2);
        cache.get(&1);

        assert_eq!(hits.get(), 2);
        assert_eq!(misses.get(), 1);
    }

    #[test]
    fn set_max_shrink_evicts_in_recency_order() {
        let mut cache = LruCache::try_new(4).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.set("d", 4);
        cache.get(&"a");

        cache.set_max(2).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(!cache.has(&"b"));
        assert!(!cache.has(&"c"));
        assert!(cache.has(&"d"));
        assert!(cache.has(&"a"));
    }

    #[test]
    fn set_max_grow_keeps_entries() {
        let mut cache = LruCache::try_new(2).unwrap();
        cache.set(1, "a");
        cache.set(2, "b");
        cache.set_max(10).unwrap();
        assert_eq!(cache.len(), 2);

        cache.set(3, "c");
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn unbounded_never_evicts() {
        let mut cache = LruCache::try_new(f64::INFINITY).unwrap();
        for i in 0..1000u32 {
            cache.set(i, i);
        }
        assert_eq!(cache.len(), 1000);
    }

    #[test]
    fn rejects_invalid_bounds() {
        assert!(LruCache::<u32, u32>::try_new(-5i32).is_err());
        assert!(LruCache::<u32, u32>::try_new(0.25f64).is_err());
        let err = LruCache::<u32, u32>::try_new(f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "LruCache::try_new: max must be an integer");
    }
}
