//! Boundary wrapper for raw data that has not been validated yet.
//!
//! An [`Untrusted`] value cannot be read directly. The only way in is to hand
//! it a validation function returning a [`Verdict`], and the caller gets back
//! exactly what that function decided.
//!
//! # Examples
//!
//! ```
//! use bastion_core::{PositiveInt, Untrusted};
//!
//! let age = Untrusted::wrap(-3_i64);
//! assert_eq!(age.unwrap(PositiveInt::maybe), None);
//! ```

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
    impl<T, E> Sealed for Result<T, E> {}
}

/// Outcome of validating untrusted data: an `Option` or a `Result`.
pub trait Verdict: sealed::Sealed {
    /// Whether the validation accepted the data.
    fn is_accepted(&self) -> bool;
}

impl<T> Verdict for Option<T> {
    fn is_accepted(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Verdict for Result<T, E> {
    fn is_accepted(&self) -> bool {
        self.is_ok()
    }
}

/// Raw value whose trustworthiness has not been established.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Untrusted<T>(T);

impl<T> Untrusted<T> {
    /// Mark `value` as untrusted.
    pub const fn wrap(value: T) -> Self {
        Self(value)
    }

    /// Consume the wrapper, returning whatever `validate` decides.
    pub fn unwrap<V, F>(self, validate: F) -> V
    where
        V: Verdict,
        F: FnOnce(T) -> V,
    {
        let verdict = validate(self.0);
        if !verdict.is_accepted() {
            tracing::debug!("untrusted value rejected by validation");
        }
        verdict
    }

    /// Validate by reference, keeping the wrapper for further checks.
    pub fn unwrap_ref<V, F>(&self, validate: F) -> V
    where
        V: Verdict,
        F: FnOnce(&T) -> V,
    {
        validate(&self.0)
    }
}

impl<T> From<T> for Untrusted<T> {
    fn from(value: T) -> Self {
        Self::wrap(value)
    }
}

impl<T> fmt::Debug for Untrusted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Untrusted(..)")
    }
}
