//! Combinators over the [`Cache`] contract.
//!
//! Free functions that consume nothing beyond the four-method contract, so
//! they behave identically over every policy. Missing keys are handled by
//! fallback value (`get_or`), lazy fallback (`get_or_else`), or error
//! (`get_or_throw`); the `get_all_*` variants do the same per key over a
//! slice. `set_all` and the `has_any`/`has_none` predicates round out bulk
//! usage.
//!
//! ```
//! use evictkit::ops;
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::Cache;
//!
//! let mut cache = LruCache::try_new(10).unwrap();
//! ops::set_all(&mut cache, [("a", 1), ("b", 2)]);
//!
//! assert_eq!(ops::get_or(&mut cache, &"a", 0), 1);
//! assert_eq!(ops::get_or(&mut cache, &"zzz", 0), 0);
//! assert!(ops::has_any(&mut cache, &["zzz", "b"]));
//! ```

use std::fmt::Debug;

use crate::error::KeyNotFound;
use crate::traits::Cache;

/// Returns the cached value for `key`, or `fallback` if absent.
///
/// A hit counts as an access for the policy (recency, frequency); a miss
/// leaves the cache untouched beyond the engine's own miss handling.
pub fn get_or<C, K, V>(cache: &mut C, key: &K, fallback: V) -> V
where
    C: Cache<K, V>,
    V: Clone,
{
    match cache.get(key) {
        Some(value) => value.clone(),
        None => fallback,
    }
}

/// Returns the cached value for `key`, computing `fallback()` only on a
/// miss.
pub fn get_or_else<C, K, V, F>(cache: &mut C, key: &K, fallback: F) -> V
where
    C: Cache<K, V>,
    V: Clone,
    F: FnOnce() -> V,
{
    match cache.get(key) {
        Some(value) => value.clone(),
        None => fallback(),
    }
}

/// Returns the cached value for `key`, or a [`KeyNotFound`] naming it.
///
/// # Errors
///
/// Fails exactly when `cache.has(key)` would return `false`.
///
/// # Example
///
/// ```
/// use evictkit::ops;
/// use evictkit::policy::lfu::LfuCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = LfuCache::try_new(10).unwrap();
/// cache.set("a", 1);
///
/// assert_eq!(ops::get_or_throw(&mut cache, &"a"), Ok(1));
/// assert!(ops::get_or_throw(&mut cache, &"b").is_err());
/// ```
pub fn get_or_throw<C, K, V>(cache: &mut C, key: &K) -> Result<V, KeyNotFound>
where
    C: Cache<K, V>,
    K: Debug,
    V: Clone,
{
    match cache.get(key) {
        Some(value) => Ok(value.clone()),
        None => Err(KeyNotFound::new(format!("{key:?}"))),
    }
}

/// Looks up every key, substituting `fallback` for each miss.
pub fn get_all_or<C, K, V>(cache: &mut C, keys: &[K], fallback: V) -> Vec<V>
where
    C: Cache<K, V>,
    V: Clone,
{
    keys.iter()
        .map(|key| get_or(cache, key, fallback.clone()))
        .collect()
}

/// Looks up every key, computing `fallback(key)` for each miss.
pub fn get_all_or_else<C, K, V, F>(cache: &mut C, keys: &[K], mut fallback: F) -> Vec<V>
where
    C: Cache<K, V>,
    V: Clone,
    F: FnMut(&K) -> V,
{
    keys.iter()
        .map(|key| match cache.get(key) {
            Some(value) => value.clone(),
            None => fallback(key),
        })
        .collect()
}

/// Looks up every key, failing on the first miss.
///
/// # Errors
///
/// Returns [`KeyNotFound`] for the first absent key; later keys are not
/// touched, so their policy state is unchanged.
pub fn get_all_or_throw<C, K, V>(cache: &mut C, keys: &[K]) -> Result<Vec<V>, KeyNotFound>
where
    C: Cache<K, V>,
    K: Debug,
    V: Clone,
{
    keys.iter().map(|key| get_or_throw(cache, key)).collect()
}

/// Returns `true` if any key is currently cached.
pub fn has_any<C, K, V>(cache: &mut C, keys: &[K]) -> bool
where
    C: Cache<K, V>,
{
    keys.iter().any(|key| cache.has(key))
}

/// Returns `true` if no key is currently cached.
pub fn has_none<C, K, V>(cache: &mut C, keys: &[K]) -> bool
where
    C: Cache<K, V>,
{
    !has_any(cache, keys)
}

/// Inserts every entry in order, applying the policy's eviction rules
/// entry by entry.
pub fn set_all<C, K, V, I>(cache: &mut C, entries: I)
where
    C: Cache<K, V>,
    I: IntoIterator<Item = (K, V)>,
{
    for (key, value) in entries {
        cache.set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::fifo::FifoCache;
    use crate::policy::lru::LruCache;

    fn seeded() -> LruCache<&'static str, i32> {
        let mut cache = LruCache::try_new(10).unwrap();
        set_all(&mut cache, [("a", 1), ("b", 2), ("c", 3)]);
        cache
    }

    #[test]
    fn get_or_falls_back_on_miss() {
        let mut cache = seeded();
        assert_eq!(get_or(&mut cache, &"a", 0), 1);
        assert_eq!(get_or(&mut cache, &"zzz", 0), 0);
    }

    #[test]
    fn get_or_else_is_lazy() {
        let mut cache = seeded();
        let mut computed = false;
        let value = get_or_else(&mut cache, &"a", || {
            computed = true;
            99
        });
        assert_eq!(value, 1);
        assert!(!computed);

        assert_eq!(get_or_else(&mut cache, &"zzz", || 99), 99);
    }

    #[test]
    fn get_or_throw_names_the_key() {
        let mut cache = seeded();
        assert_eq!(get_or_throw(&mut cache, &"b"), Ok(2));

        let err = get_or_throw(&mut cache, &"ghost").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn get_all_variants() {
        let mut cache = seeded();
        assert_eq!(get_all_or(&mut cache, &["a", "x", "c"], 0), vec![1, 0, 3]);
        assert_eq!(
            get_all_or_else(&mut cache, &["a", "x"], |k| k.len() as i32),
            vec![1, 1]
        );
        assert_eq!(get_all_or_throw(&mut cache, &["a", "b"]), Ok(vec![1, 2]));
        assert!(get_all_or_throw(&mut cache, &["a", "nope", "b"]).is_err());
    }

    #[test]
    fn has_any_and_has_none() {
        let mut cache = seeded();
        assert!(has_any(&mut cache, &["zzz", "c"]));
        assert!(!has_any(&mut cache, &["x", "y"]));
        assert!(has_none(&mut cache, &["x", "y"]));
        assert!(!has_none(&mut cache, &["a"]));
        assert!(has_none(&mut cache, &[]));
    }

    #[test]
    fn set_all_applies_eviction_per_entry() {
        let mut cache = FifoCache::try_new(2).unwrap();
        set_all(&mut cache, [("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(cache.len(), 2);
        assert!(!cache.has(&"a"));
        assert!(cache.has(&"b"));
        assert!(cache.has(&"c"));
    }

    #[test]
    fn combinators_work_over_any_policy() {
        let mut fifo = FifoCache::try_new(10).unwrap();
        set_all(&mut fifo, [("a", 1)]);
        assert_eq!(get_or(&mut fifo, &"a", 0), 1);
        assert_eq!(get_or_throw(&mut fifo, &"a"), Ok(1));
        assert!(has_any(&mut fifo, &["a"]));
    }
}
