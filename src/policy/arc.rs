//! Adaptive replacement cache.
//!
//! ## Architecture
//!
//! Four lists and one adaptation parameter:
//!
//! ```text
//!        resident (hold values)            ghosts (keys only)
//!   ┌────────────────────────────┐   ┌──────────────────────────┐
//!   │  T1: seen exactly once     │   │  B1: evicted from T1     │
//!   │  T2: seen more than once   │   │  B2: evicted from T2     │
//!   └────────────────────────────┘   └──────────────────────────┘
//!
//!   |T1| + |T2| <= max        |B1| + |B2| <= max        0 <= p <= max
//! ```
//!
//! `p` is the target size of T1. A hit in ghost list B1 means a
//! recently-evicted once-seen key came back, so recency deserves more room
//! and `p` grows; a hit in B2 shrinks it. The adjustment step is
//! `max(1, ⌊other ghost len / this ghost len⌋)`, clamped into `[0, max]`.
//!
//! ## Operation effects
//!
//! | Event | T1 | T2 | B1 | B2 | p |
//! |-------|----|----|----|----|---|
//! | `get` hit in T1          | remove | insert newest | | | |
//! | `get` hit in T2          | | re-insert newest | | | |
//! | `get` miss               | | | | | |
//! | `set` resident           | remove if in T1 | insert newest | | | |
//! | `set` hit in B1          | | insert newest | remove | | grows |
//! | `set` hit in B2          | | insert newest | | remove | shrinks |
//! | `set` novel              | insert newest | | | | |
//!
//! Ghost hits and novel inserts first run `replace` when the resident total
//! is at capacity: evict the oldest of T1 into B1 while `|T1| > p` (or T2
//! is empty, or on a B2 hit with `|T1| == p`), otherwise the oldest of T2
//! into B2. The `|T1| == p` tie-break on B2 hits comes straight from the
//! published algorithm and is kept verbatim.
//!
//! `get` has no ghost logic at all: a miss is a plain miss, and only `set`
//! consults B1/B2. Ghost keys are not resident, so `has` and `del` ignore
//! them.

use std::fmt;
use std::hash::Hash;

use crate::bounds::{validate_max, Bound, BoundError};
use crate::ds::ghost_set::GhostSet;
use crate::ds::ordered_map::OrderedMap;
use crate::error::ConfigError;
use crate::traits::Cache;

/// ARC cache: balances recency (T1) against frequency (T2) adaptively.
///
/// # Example
///
/// ```
/// use evictkit::policy::arc::ArcCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = ArcCache::try_new(100).unwrap();
/// cache.set(1, "once");
/// assert_eq!(cache.t1_len(), 1);
///
/// // A second access promotes the entry to the frequency side.
/// cache.get(&1);
/// assert_eq!(cache.t1_len(), 0);
/// assert_eq!(cache.t2_len(), 1);
/// ```
pub struct ArcCache<K, V> {
    t1: OrderedMap<K, V>,
    t2: OrderedMap<K, V>,
    b1: GhostSet<K>,
    b2: GhostSet<K>,
    p: u64,
    max: Bound,
}

impl<K: Eq + Hash + Clone, V> ArcCache<K, V> {
    /// Creates an ARC cache holding at most `max` resident entries.
    ///
    /// `p` starts at 0 (pure frequency bias) and adapts from there as
    /// ghost hits arrive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` is negative, NaN, or fractional.
    pub fn try_new<B>(max: B) -> Result<Self, ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        let max = validate_max("ArcCache::try_new", max)?;
        Ok(Self {
            t1: OrderedMap::new(),
            t2: OrderedMap::new(),
            b1: GhostSet::new(),
            b2: GhostSet::new(),
            p: 0,
            max,
        })
    }

    /// Returns the configured capacity bound.
    pub fn max(&self) -> Bound {
        self.max
    }

    /// Number of resident entries seen exactly once.
    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    /// Number of resident entries seen more than once.
    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Number of remembered keys evicted from T1.
    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    /// Number of remembered keys evicted from T2.
    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    /// Current adaptation target for `|T1|`, in `[0, max]`.
    pub fn p_value(&self) -> u64 {
        self.p
    }

    /// Removes every resident entry and every ghost, and resets `p`.
    pub fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = 0;
    }

    fn resident_len(&self) -> u64 {
        (self.t1.len() + self.t2.len()) as u64
    }

    fn at_capacity(&self) -> bool {
        match self.max.get() {
            Some(max) => self.resident_len() >= max,
            None => false,
        }
    }

    /// Makes room for one incoming resident entry.
    ///
    /// Prefers evicting the oldest of T1 while it holds more than `p`
    /// entries; a B2 hit at exactly `|T1| == p` also drains T1 (the
    /// reference algorithm's tie-break). Otherwise the oldest of T2 goes.
    fn replace(&mut self, hit_in_b2: bool) {
        let t1_len = self.t1.len() as u64;
        let drain_t1 =
            t1_len > 0 && (t1_len > self.p || (hit_in_b2 && t1_len == self.p) || self.t2.is_empty());

        if drain_t1 {
            if let Some((key, _)) = self.t1.pop_oldest() {
                self.b1.insert(key);
                self.trim_ghosts();
            }
        } else if let Some((key, _)) = self.t2.pop_oldest() {
            self.b2.insert(key);
            self.trim_ghosts();
        }
    }

    /// Caps combined ghost memory at `max` keys, preferring to forget B1
    /// history while the recency side (T1 + B1) exceeds the bound.
    fn trim_ghosts(&mut self) {
        let Some(max) = self.max.get() else {
            return;
        };
        while (self.b1.len() + self.b2.len()) as u64 > max {
            let recency_over = (self.t1.len() + self.b1.len()) as u64 > max;
            if recency_over && !self.b1.is_empty() {
                self.b1.pop_oldest();
            } else if !self.b2.is_empty() {
                self.b2.pop_oldest();
            } else if !self.b1.is_empty() {
                self.b1.pop_oldest();
            } else {
                break;
            }
        }
    }

    /// Grows `p` on a B1 hit: recency is proving useful.
    fn adapt_toward_recency(&mut self) {
        let step = std::cmp::max(1, self.b2.len() as u64 / self.b1.len() as u64);
        self.p = self.p.saturating_add(step);
        if let Some(max) = self.max.get() {
            self.p = self.p.min(max);
        }
    }

    /// Shrinks `p` on a B2 hit: frequency is proving useful.
    fn adapt_toward_frequency(&mut self) {
        let step = std::cmp::max(1, self.b1.len() as u64 / self.b2.len() as u64);
        self.p = self.p.saturating_sub(step);
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        if let Some(max) = self.max.get() {
            assert!(self.resident_len() <= max);
            assert!((self.b1.len() + self.b2.len()) as u64 <= max);
            assert!(self.p <= max);
        }
        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();
        for (key, _) in self.t1.iter() {
            assert!(!self.t2.contains(key));
            assert!(!self.b1.contains(key));
            assert!(!self.b2.contains(key));
        }
        for (key, _) in self.t2.iter() {
            assert!(!self.b1.contains(key));
            assert!(!self.b2.contains(key));
        }
    }
}

impl<K: Eq + Hash + Clone, V> Cache<K, V> for ArcCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(value) = self.t1.remove(key) {
            // Second access: promote to the frequency side.
            self.t2.insert(key.clone(), value);
            return self.t2.get(key);
        }
        if self.t2.contains(key) {
            self.t2.touch(key);
            return self.t2.get(key);
        }
        None
    }

    fn set(&mut self, key: K, value: V) {
        if self.t1.remove(&key).is_some() || self.t2.contains(&key) {
            self.t2.insert(key.clone(), value);
            self.t2.touch(&key);
            return;
        }

        if self.b1.contains(&key) {
            self.adapt_toward_recency();
            if self.at_capacity() {
                self.replace(false);
            }
            self.b1.remove(&key);
            self.t2.insert(key, value);
            return;
        }

        if self.b2.contains(&key) {
            self.adapt_toward_frequency();
            if self.at_capacity() {
                self.replace(true);
            }
            self.b2.remove(&key);
            self.t2.insert(key, value);
            return;
        }

        if self.at_capacity() {
            self.replace(false);
        }
        // Still full means nothing was evictable (max of 0): admit nothing.
        if !self.at_capacity() {
            self.t1.insert(key, value);
        }
    }

    fn has(&mut self, key: &K) -> bool {
        self.t1.contains(key) || self.t2.contains(key)
    }

    fn del(&mut self, key: &K) {
        if self.t1.remove(key).is_none() {
            self.t2.remove(key);
        }
    }

    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for ArcCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcCache")
            .field("t1", &self.t1.len())
            .field("t2", &self.t2.len())
            .field("b1", &self.b1.len())
            .field("b2", &self.b2.len())
            .field("p", &self.p)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
