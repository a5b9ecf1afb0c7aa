//! Validated capacity and time bounds.
//!
//! Every sized policy is configured with a [`Bound`]: either the unbounded
//! sentinel or a non-negative integer. Raw numeric inputs are converted via
//! `TryFrom`, and the conversions are the single place where invalid bounds
//! are rejected:
//!
//! | Input | Result |
//! |---|---|
//! | `usize` / `u64` / `u32` | always valid |
//! | `i32` / `i64` | rejected if negative |
//! | `f64` | `INFINITY` is [`Bound::Unbounded`]; NaN, negatives and fractional values are rejected |
//! | `Bound` | identity |
//!
//! Constructors and setters funnel conversions through [`validate_max`] /
//! [`validate_ttl`], which label failures with the parameter name and caller
//! context to produce a [`ConfigError`], the only configuration failure
//! mode in the crate.
//!
//! ## Example
//!
//! ```
//! use evictkit::bounds::Bound;
//!
//! assert_eq!(Bound::try_from(100i64), Ok(Bound::Finite(100)));
//! assert_eq!(Bound::try_from(f64::INFINITY), Ok(Bound::Unbounded));
//! assert!(Bound::try_from(-1i64).is_err());
//! assert!(Bound::try_from(2.5f64).is_err());
//! ```

use std::convert::Infallible;

use crate::error::ConfigError;

/// A capacity or time bound: unbounded, or a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// No limit; the bound is never exceeded.
    Unbounded,
    /// A finite limit (entry count, or milliseconds for TTLs).
    Finite(u64),
}

impl Bound {
    /// The unbounded sentinel.
    pub const UNBOUNDED: Bound = Bound::Unbounded;

    /// Returns the finite value, or `None` if unbounded.
    #[inline]
    pub fn get(self) -> Option<u64> {
        match self {
            Bound::Unbounded => None,
            Bound::Finite(n) => Some(n),
        }
    }

    /// Returns `true` if this is the unbounded sentinel.
    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Returns `true` if `n` exceeds this bound.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::bounds::Bound;
    ///
    /// assert!(Bound::Finite(3).exceeded_by(4));
    /// assert!(!Bound::Finite(3).exceeded_by(3));
    /// assert!(!Bound::Unbounded.exceeded_by(u64::MAX));
    /// ```
    #[inline]
    pub fn exceeded_by(self, n: u64) -> bool {
        match self {
            Bound::Unbounded => false,
            Bound::Finite(limit) => n > limit,
        }
    }
}

/// Why a raw numeric input is not a valid [`Bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundError {
    /// The input was negative.
    Negative,
    /// The input was NaN or had a fractional part.
    NotAnInteger,
}

impl From<Infallible> for BoundError {
    fn from(x: Infallible) -> Self {
        match x {}
    }
}

impl From<usize> for Bound {
    fn from(n: usize) -> Self {
        Bound::Finite(n as u64)
    }
}

impl From<u64> for Bound {
    fn from(n: u64) -> Self {
        Bound::Finite(n)
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Bound::Finite(n as u64)
    }
}

impl TryFrom<i32> for Bound {
    type Error = BoundError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        i64::from(n).try_into()
    }
}

impl TryFrom<i64> for Bound {
    type Error = BoundError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 0 {
            Err(BoundError::Negative)
        } else {
            Ok(Bound::Finite(n as u64))
        }
    }
}

impl TryFrom<f64> for Bound {
    type Error = BoundError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if n == f64::INFINITY {
            Ok(Bound::Unbounded)
        } else if n.is_nan() || n.fract() != 0.0 {
            Err(BoundError::NotAnInteger)
        } else if n < 0.0 {
            Err(BoundError::Negative)
        } else {
            Ok(Bound::Finite(n as u64))
        }
    }
}

/// Validates a `max` bound, labeling failures with the caller `context`.
pub fn validate_max<B>(context: &str, max: B) -> Result<Bound, ConfigError>
where
    B: TryInto<Bound>,
    B::Error: Into<BoundError>,
{
    validate(context, "max", max)
}

/// Validates a `ttl` bound (milliseconds), labeling failures with the caller
/// `context`.
pub fn validate_ttl<B>(context: &str, ttl: B) -> Result<Bound, ConfigError>
where
    B: TryInto<Bound>,
    B::Error: Into<BoundError>,
{
    validate(context, "ttl", ttl)
}

fn validate<B>(context: &str, param: &str, raw: B) -> Result<Bound, ConfigError>
where
    B: TryInto<Bound>,
    B::Error: Into<BoundError>,
{
    raw.try_into().map_err(|err| {
        let reason = match err.into() {
            BoundError::Negative => "must be greater than -1",
            BoundError::NotAnInteger => "must be an integer",
        };
        ConfigError::new(format!("{context}: {param} {reason}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_inputs_are_always_valid() {
        assert_eq!(Bound::from(0usize), Bound::Finite(0));
        assert_eq!(Bound::from(42u64), Bound::Finite(42));
        assert_eq!(Bound::from(7u32), Bound::Finite(7));
    }

    #[test]
    fn signed_inputs_reject_negatives() {
        assert_eq!(Bound::try_from(5i64), Ok(Bound::Finite(5)));
        assert_eq!(Bound::try_from(0i32), Ok(Bound::Finite(0)));
        assert_eq!(Bound::try_from(-1i64), Err(BoundError::Negative));
        assert_eq!(Bound::try_from(-100i32), Err(BoundError::Negative));
    }

    #[test]
    fn float_infinity_is_the_unbounded_sentinel() {
        assert_eq!(Bound::try_from(f64::INFINITY), Ok(Bound::Unbounded));
    }

    #[test]
    fn float_rejects_nan_negative_and_fractional() {
        assert_eq!(Bound::try_from(f64::NAN), Err(BoundError::NotAnInteger));
        assert_eq!(Bound::try_from(2.5f64), Err(BoundError::NotAnInteger));
        assert_eq!(Bound::try_from(-2.0f64), Err(BoundError::Negative));
        assert_eq!(
            Bound::try_from(f64::NEG_INFINITY),
            Err(BoundError::NotAnInteger)
        );
        assert_eq!(Bound::try_from(3.0f64), Ok(Bound::Finite(3)));
    }

    #[test]
    fn exceeded_by_semantics() {
        assert!(!Bound::Finite(0).exceeded_by(0));
        assert!(Bound::Finite(0).exceeded_by(1));
        assert!(!Bound::Unbounded.exceeded_by(u64::MAX));
    }

    #[test]
    fn validate_max_labels_context_and_param() {
        let err = validate_max("LruCache::set_max", -1i64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "LruCache::set_max: max must be greater than -1"
        );
    }

    #[test]
    fn validate_ttl_labels_context_and_param() {
        let err = validate_ttl("LruTtlCache::try_new", 0.5f64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "LruTtlCache::try_new: ttl must be an integer"
        );
    }

    #[test]
    fn validate_accepts_bound_identity() {
        assert_eq!(
            validate_max("ctx", Bound::Unbounded),
            Ok(Bound::Unbounded)
        );
    }
}
