//! Integer guaranteed to be zero or greater.

use std::fmt;

use crate::error::{Error, Result};

/// Opaque validated integer - guaranteed to be `>= 0` if constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct PositiveInt(i64);

impl PositiveInt {
    fn validate(n: i64, field: Option<&str>) -> Result<Self> {
        if n < 0 {
            return Err(Error::negative(field, n));
        }
        Ok(Self(n))
    }

    /// `Some` when `n >= 0`, `None` otherwise.
    #[must_use]
    pub fn maybe(n: i64) -> Option<Self> {
        Self::validate(n, None).ok()
    }

    /// Validate and create a new non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Negative`] when `n < 0`.
    pub fn new(n: i64) -> Result<Self> {
        Self::validate(n, None)
    }

    /// Like [`PositiveInt::new`], naming `field` in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Negative`] when `n < 0`.
    pub fn named(n: i64, field: &str) -> Result<Self> {
        Self::validate(n, Some(field))
    }

    /// Get the inner value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Inner value as an unsigned integer. Lossless by construction.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl TryFrom<i64> for PositiveInt {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> {
        Self::new(n)
    }
}

impl From<PositiveInt> for i64 {
    fn from(n: PositiveInt) -> Self {
        n.0
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
