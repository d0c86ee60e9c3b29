//! Pure boolean helpers for phrasing validity rules.

use regex::Regex;

pub const fn is_true(x: bool) -> bool {
    x
}

pub const fn is_false(x: bool) -> bool {
    !x
}

/// Presence check, the counterpart of a non-null test.
pub const fn is_present<T>(x: &Option<T>) -> bool {
    x.is_some()
}

/// Whether `text` matches the regular expression `pattern`.
///
/// An invalid pattern never matches; the compile error is logged.
pub fn matches(text: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "invalid pattern, treating as no match");
            false
        }
    }
}

/// `min <= x <= max`
pub fn inclusive_between<T: PartialOrd>(x: &T, min: &T, max: &T) -> bool {
    min <= x && x <= max
}

/// `min < x < max`
pub fn exclusive_between<T: PartialOrd>(x: &T, min: &T, max: &T) -> bool {
    min < x && x < max
}

/// Chainable conjunction and disjunction on `bool`.
///
/// The `_lazy` forms only evaluate the right-hand side when needed.
pub trait Predicate {
    fn and(self, other: bool) -> bool;
    fn and_lazy<F: FnOnce() -> bool>(self, other: F) -> bool;
    fn or(self, other: bool) -> bool;
    fn or_lazy<F: FnOnce() -> bool>(self, other: F) -> bool;
}

impl Predicate for bool {
    fn and(self, other: bool) -> bool {
        self && other
    }

    fn and_lazy<F: FnOnce() -> bool>(self, other: F) -> bool {
        self && other()
    }

    fn or(self, other: bool) -> bool {
        self || other
    }

    fn or_lazy<F: FnOnce() -> bool>(self, other: F) -> bool {
        self || other()
    }
}
