//! Error types for the evictkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache bound (`max`, `ttl`) is invalid
//!   (negative or non-integer, excluding the unbounded sentinel).
//! - [`KeyNotFound`]: Returned by the "or-throw" combinators in
//!   [`ops`](crate::ops) when a key is absent. The core engines never
//!   produce it; misses are ordinary `None` values.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::error::ConfigError;
//! use evictkit::policy::lru::LruCache;
//!
//! // Fallible constructor for user-configurable bounds
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! // An invalid bound is caught without panicking
//! let bad = LruCache::<String, i32>::try_new(-1i64);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when a cache configuration bound is invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::try_new`](crate::policy::lru::LruCache::try_new) and by
/// runtime setters such as
/// [`LruCache::set_max`](crate::policy::lru::LruCache::set_max). Carries a
/// human-readable description naming the offending parameter and the caller
/// context.
///
/// # Example
///
/// ```
/// use evictkit::policy::lfu::LfuCache;
///
/// let err = LfuCache::<u64, u64>::try_new(-3i64).unwrap_err();
/// assert!(err.to_string().contains("max"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// KeyNotFound
// ---------------------------------------------------------------------------

/// Error returned when an "or-throw" combinator finds no entry for a key.
///
/// The four core operations never fail; this type exists so callers can
/// build fallible lookups on top of `has`/`get`, which the engines keep
/// mutually consistent.
///
/// # Example
///
/// ```
/// use evictkit::ops;
/// use evictkit::policy::lru::LruCache;
///
/// let mut cache = LruCache::<&str, i32>::try_new(10).unwrap();
/// let err = ops::get_or_throw(&mut cache, &"missing").unwrap_err();
/// assert!(err.to_string().contains("missing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFound(String);

impl KeyNotFound {
    /// Creates a new `KeyNotFound` for the given key description.
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns a description of the missing key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {} not found", self.0)
    }
}

impl std::error::Error for KeyNotFound {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
