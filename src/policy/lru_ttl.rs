//! Least recently used cache with per-entry time-to-live.
//!
//! ## Architecture
//!
//! Same recency list as [`lru`](crate::policy::lru), but every entry is
//! stored with the monotonic millisecond timestamp of its last touch:
//!
//! ```text
//!   front ─► [a @ t=100] ◄──► [b @ t=400] ◄──► [c @ t=900] ◄── back
//!            oldest touch                        newest touch
//! ```
//!
//! Because `get` and `set` refresh the timestamp and the recency position
//! together, last-touch times are monotonically non-decreasing front to
//! back. Expired entries are therefore always a contiguous prefix at the
//! front, and the lazy-expiry sweep stops at the first live entry.
//!
//! ## Lazy expiry
//!
//! There are no timers. Every public operation (`get`, `set`, `has`, `del`,
//! [`evict`](LruTtlCache::evict)) first pops from the front while
//! `touched + ttl <= now`. An entry past its TTL is observably gone even if
//! the sweep has not physically removed it yet, because the sweep runs
//! before the operation consults the map.
//!
//! ## Clocks
//!
//! Time comes from an injected [`Clock`]. Production code uses the default
//! [`SystemClock`]; tests inject a [`ManualClock`](crate::clock::ManualClock)
//! and advance it explicitly, so expiry is fully deterministic.

use std::fmt;
use std::hash::Hash;

use crate::bounds::{validate_max, validate_ttl, Bound, BoundError};
use crate::clock::{Clock, SystemClock};
use crate::ds::ordered_map::OrderedMap;
use crate::error::ConfigError;
use crate::traits::Cache;

#[derive(Debug)]
struct Stamped<V> {
    value: V,
    touched: u64,
}

/// LRU cache whose entries also expire `ttl` milliseconds after their last
/// touch.
///
/// # Example
///
/// ```
/// use evictkit::clock::ManualClock;
/// use evictkit::policy::lru_ttl::LruTtlCache;
/// use evictkit::traits::Cache;
///
/// let clock = ManualClock::new();
/// let mut cache = LruTtlCache::try_with_clock(10, 5_000, clock.clone()).unwrap();
///
/// cache.set("a", 1);
/// clock.advance(6_000);
/// assert_eq!(cache.get(&"a"), None);
/// ```
pub struct LruTtlCache<K, V, C: Clock = SystemClock> {
    entries: OrderedMap<K, Stamped<V>>,
    max: Bound,
    ttl: Bound,
    clock: C,
}

impl<K: Eq + Hash + Clone, V> LruTtlCache<K, V> {
    /// Creates a cache holding at most `max` entries, each living at most
    /// `ttl` milliseconds past its last touch, timed by the system clock.
    ///
    /// Either bound accepts `f64::INFINITY`: an unbounded `max` never
    /// evicts for size, an unbounded `ttl` never expires.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` or `ttl` is negative, NaN, or
    /// fractional.
    pub fn try_new<BM, BT>(max: BM, ttl: BT) -> Result<Self, ConfigError>
    where
        BM: TryInto<Bound>,
        BM::Error: Into<BoundError>,
        BT: TryInto<Bound>,
        BT::Error: Into<BoundError>,
    {
        Self::try_with_clock(max, ttl, SystemClock::default())
    }
}

impl<K: Eq + Hash + Clone, V, C: Clock> LruTtlCache<K, V, C> {
    /// Creates a cache timed by an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max` or `ttl` fails validation.
    pub fn try_with_clock<BM, BT>(max: BM, ttl: BT, clock: C) -> Result<Self, ConfigError>
    where
        BM: TryInto<Bound>,
        BM::Error: Into<BoundError>,
        BT: TryInto<Bound>,
        BT::Error: Into<BoundError>,
    {
        let max = validate_max("LruTtlCache::try_new", max)?;
        let ttl = validate_ttl("LruTtlCache::try_new", ttl)?;
        Ok(Self {
            entries: OrderedMap::new(),
            max,
            ttl,
            clock,
        })
    }

    /// Returns the configured capacity bound.
    pub fn max(&self) -> Bound {
        self.max
    }

    /// Returns the configured time-to-live in milliseconds.
    pub fn ttl(&self) -> Bound {
        self.ttl
    }

    /// Removes every entry that has outlived the TTL.
    ///
    /// All other operations run this sweep implicitly; calling it directly
    /// only reclaims memory earlier. With nothing expired it is a no-op.
    pub fn evict(&mut self) {
        self.expire();
    }

    /// Replaces the capacity bound, evicting least recently used entries if
    /// the cache no longer fits.
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
        self.max = validate_max("LruTtlCache::set_max", max)?;
        self.expire();
        while self.max.exceeded_by(self.entries.len() as u64) {
            self.entries.pop_oldest();
        }
        Ok(())
    }

    /// Replaces the TTL and immediately re-runs the expiry sweep, so a
    /// shortened TTL takes effect at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `ttl` fails validation; the cache is left
    /// unchanged.
    pub fn set_ttl<B>(&mut self, ttl: B) -> Result<(), ConfigError>
    where
        B: TryInto<Bound>,
        B::Error: Into<BoundError>,
    {
        self.ttl = validate_ttl("LruTtlCache::set_ttl", ttl)?;
        self.expire();
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn expire(&mut self) {
        let Some(ttl) = self.ttl.get() else {
            return;
        };
        let now = self.clock.now_ms();
        while let Some((_, stamped)) = self.entries.peek_oldest() {
            if stamped.touched.saturating_add(ttl) <= now {
                self.entries.pop_oldest();
            } else {
                // Touch times are non-decreasing front to back, so the
                // rest of the list is live too.
                break;
            }
        }
    }
}

impl<K: Eq + Hash + Clone, V, C: Clock> Cache<K, V> for LruTtlCache<K, V, C> {
    fn get(&mut self, key: &K) -> Option<&V> {
        self.expire();
        if !self.entries.touch(key) {
            return None;
        }
        let now = self.clock.now_ms();
        if let Some(stamped) = self.entries.get_mut(key) {
            stamped.touched = now;
        }
        self.entries.get(key).map(|stamped| &stamped.value)
    }

    fn set(&mut self, key: K, value: V) {
        self.expire();
        let fresh = Stamped {
            value,
            touched: self.clock.now_ms(),
        };
        if self.entries.touch(&key) {
            self.entries.insert(key, fresh);
            return;
        }
        self.entries.insert(key, fresh);
        if self.max.exceeded_by(self.entries.len() as u64) {
            self.entries.pop_oldest();
        }
    }

    fn has(&mut self, key: &K) -> bool {
        self.expire();
        self.entries.contains(key)
    }

    fn del(&mut self, key: &K) {
        self.expire();
        self.entries.remove(key);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V, C> fmt::Debug for LruTtlCache<K, V, C>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruTtlCache")
            .field("len", &self.entries.len())
            .field("max", &self.max)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
