//! # The Capability Contract
//!
//! Every eviction policy in this crate implements one trait, [`Cache`],
//! exposing exactly four observable operations. Consumers hold a
//! `C: Cache<K, V>` and can swap policies without touching call sites; the
//! combinators in [`ops`](crate::ops) are written against nothing else.
//!
//! ```text
//!                 ┌────────────────────────────────────┐
//!                 │           Cache<K, V>              │
//!                 │                                    │
//!                 │  get(&mut, &K) → Option<&V>        │
//!                 │  set(&mut, K, V)                   │
//!                 │  has(&mut, &K) → bool              │
//!                 │  del(&mut, &K)                     │
//!                 │  len(&) → usize                    │
//!                 └──────────────┬─────────────────────┘
//!                                │ implemented by
//!          ┌──────────┬──────────┼──────────┬───────────┐
//!          ▼          ▼          ▼          ▼           ▼
//!      FifoCache   LruCache  LruTtlCache  LfuCache   ArcCache
//! ```
//!
//! ## Contract guarantees
//!
//! | Operation | Guarantee |
//! |-----------|-----------|
//! | `get`     | Never fails; a miss is `None`, not an error |
//! | `set`     | Never fails; may evict per policy to hold the capacity bound |
//! | `has`     | Never fails; accurately predicts whether an immediately following `get` returns a value |
//! | `del`     | Never fails, including for absent keys |
//!
//! `has` takes `&mut self` because the contract must be uniform: the
//! LRU+TTL policy runs its lazy-expiry sweep at the start of every public
//! operation, including `has`. For every other policy, `has` is observably
//! side-effect-free: two consecutive calls with no intervening mutation
//! return the same result, and it never perturbs eviction order.
//!
//! Policy-specific configuration (`set_max`, `set_ttl`, `evict`, hooks) is
//! deliberately *not* part of the contract; those are inherent methods on
//! the concrete engines, since reconfiguration surfaces differ per policy.

/// Uniform capability contract implemented by every eviction policy.
///
/// # Type Parameters
///
/// - `K`: Key type (engines require `Eq + Hash + Clone`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use evictkit::traits::Cache;
/// use evictkit::policy::lru::LruCache;
/// use evictkit::policy::arc::ArcCache;
///
/// // Works against any policy
/// fn warm<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.set(*key, value.clone());
///     }
/// }
///
/// let mut lru = LruCache::try_new(100).unwrap();
/// let mut arc = ArcCache::try_new(100).unwrap();
/// let data = vec![(1, "one".to_string()), (2, "two".to_string())];
/// warm(&mut lru, &data);
/// warm(&mut arc, &data);
/// assert_eq!(lru.len(), 2);
/// assert_eq!(arc.len(), 2);
/// ```
pub trait Cache<K, V> {
    /// Looks up `key`, returning its value or `None` on a miss.
    ///
    /// Updates policy state on a hit (recency position, frequency count,
    /// ARC list membership) per the engine's eviction rules.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::traits::Cache;
    /// use evictkit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::try_new(10).unwrap();
    /// cache.set(1, "value");
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts or replaces the value for `key`.
    ///
    /// Replacing updates policy state exactly as the engine's rules dictate
    /// (for LRU, the recency bump happens even though the size does not
    /// change). If the insert pushes the engine over its capacity bound,
    /// the policy's eviction victim is removed before `set` returns.
    fn set(&mut self, key: K, value: V);

    /// Returns `true` if `key` currently has a live entry.
    ///
    /// Never perturbs eviction order. For policies with ghost bookkeeping
    /// (ARC), remembered-but-evicted keys are *not* present.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::traits::Cache;
    /// use evictkit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::try_new(10).unwrap();
    /// cache.set(1, "value");
    /// assert!(cache.has(&1));
    /// assert!(!cache.has(&99));
    /// ```
    fn has(&mut self, key: &K) -> bool;

    /// Removes the entry for `key`, if any. Removing an absent key is a
    /// no-op.
    fn del(&mut self, key: &K);

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
