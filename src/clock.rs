//! Time source for TTL-based policies.
//!
//! TTL expiry compares per-entry timestamps against "now". The timestamp
//! source is a trait so tests can drive expiry deterministically instead of
//! sleeping:
//!
//! - [`SystemClock`]: monotonic milliseconds since the clock was created.
//! - [`ManualClock`]: cheaply clonable handle over a shared counter,
//!   advanced explicitly by tests.
//!
//! ## Example
//!
//! ```
//! use evictkit::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! assert_eq!(clock.now_ms(), 0);
//! clock.advance(6_000);
//! assert_eq!(clock.now_ms(), 6_000);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic millisecond clock.
pub trait Clock {
    /// Returns the current reading in milliseconds.
    ///
    /// Readings must be monotonically non-decreasing; the absolute origin is
    /// unspecified.
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], anchored at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock reading zero at the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for deterministic expiry tests.
///
/// Clones share the same counter, so a test can hold one handle while the
/// cache under test holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Sets the clock to an absolute reading.
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
