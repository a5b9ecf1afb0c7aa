//! First-in first-out cache.
//!
//! Entries are evicted strictly in insertion order. Neither `get` nor
//! replacing an existing key changes an entry's position, so eviction
//! timing is fully predictable from the insert sequence. The engine is one
//! [`OrderedMap`] plus a capacity bound.

use std::fmt;
use std::hash::Hash;

use crate::bounds::{validate_max, Bound, BoundError};
use crate::ds::ordered_map::OrderedMap;
use crate::error::ConfigError;
use crate::traits::Cache;

/// FIFO cache: evicts in pure insertion order.
///
/// # Example
///
/// ```
/// use evictkit::policy::fifo::FifoCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = FifoCache::try_new(2).unwrap();
/// cache.set("a", 1);
/// cache.set("b", 2);
///
/// // Reading "a" does not protect it: insertion order rules.
/// cache.get(&"a");
/// cache.set("c", 3);
/// assert!(!cache.has(&"a"));
/// assert!(cache.has(&"b"));
/// assert!(cache.has(&"c"));
/// ```
pub struct FifoCache<K, V> {
    entries: OrderedMap<K, V>,
    max: Bound,
    on_hit: Option<Box<dyn FnMut(&K)>>,
    on_miss: Option<Box<dyn FnMut(&K)>>,
}

impl<K: Eq + Hash + Clone, V> FifoCache<K, V> {
    /// Creates a FIFO cache holding at most `max` entries.
    ///
    /// Accepts any numeric bound: unsigned integers, non-negative signed
    /// integers, or `f64::INFINITY` for an unbounded cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` is negative, NaN, or fractional.
    pub fn try_new<B>(max: B) -> Result<Self, ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        let max = validate_max("FifoCache::try_new", max)?;
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

    /// Replaces the capacity bound, evicting oldest entries first if the
    /// cache now exceeds it.
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
        self.max = validate_max("FifoCache::set_max", max)?;
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

impl<K: Eq + Hash + Clone, V> Cache<K, V> for FifoCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains(key) {
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
        let replaced = self.entries.insert(key, value).is_some();
        if !replaced && self.max.exceeded_by(self.entries.len() as u64) {
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

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for FifoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCache")
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
    fn evicts_in_insertion_order() {
        let mut cache = FifoCache::try_new(3).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.set("d", 4);

        assert!(!cache.has(&"a"));
        assert!(cache.has(&"b"));
        assert!(cache.has(&"c"));
        assert!(cache.has(&"d"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn get_does_not_reorder() {
        let mut cache = FifoCache::try_new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));

        cache.set("c", 3);
        assert!(!cache.has(&"a"));
    }

    #[test]
    fn replace_keeps_position_and_never_evicts() {
        let mut cache = FifoCache::try_new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 10);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&10));

        // "a" is still oldest.
        cache.set("c", 3);
        assert!(!cache.has(&"a"));
        assert!(cache.has(&"b"));
    }

    #[test]
    fn hooks_fire_on_hit_and_miss() {
        let hits = Rc::new(Cell::new(0));
        let misses = Rc::new(Cell::new(0));
        let hits2 = Rc::clone(&hits);
        let misses2 = Rc::clone(&misses);

        let mut cache = FifoCache::try_new(10)
            .unwrap()
            .on_hit(move |_: &&str| hits2.set(hits2.get() + 1))
            .on_miss(move |_: &&str| misses2.set(misses2.get() + 1));

        cache.set("a", 1);
        cache.get(&"a");
        cache.get(&"a");
        cache.get(&"zzz");

        assert_eq!(hits.get(), 2);
        assert_eq!(misses.get(), 1);
    }

    #[test]
    fn set_max_shrinks_oldest_first() {
        let mut cache = FifoCache::try_new(4).unwrap();
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            cache.set(key, i);
        }

        cache.set_max(2).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(!cache.has(&"a"));
        assert!(!cache.has(&"b"));
        assert!(cache.has(&"c"));
        assert!(cache.has(&"d"));
    }

    #[test]
    fn rejects_invalid_bounds() {
        assert!(FifoCache::<u32, u32>::try_new(-1i64).is_err());
        assert!(FifoCache::<u32, u32>::try_new(1.5f64).is_err());
        assert!(FifoCache::<u32, u32>::try_new(f64::INFINITY).is_ok());

        let mut cache = FifoCache::<u32, u32>::try_new(2).unwrap();
        cache.set(1, 1);
        assert!(cache.set_max(f64::NAN).is_err());
        // Failed set_max leaves contents alone.
        assert!(cache.has(&1));
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut cache = FifoCache::try_new(0).unwrap();
        cache.set("a", 1);
        assert!(!cache.has(&"a"));
        assert!(cache.is_empty());
    }
}
