//! Applicative composition that keeps every failure.
//!
//! [`crate::ResultExt::select_many`] stops at the first failure, which is right
//! when each step depends on the previous one. Independent validations should
//! instead report everything that is wrong at once: a curried constructor is
//! lifted with [`lift`] and fed one validated argument at a time with
//! [`Apply::apply`]. Errors are concatenated left operand first.
//!
//! # Examples
//!
//! ```
//! use bastion_core::{Apply, NonEmptyString, PositiveInt, lift};
//!
//! let user = lift(|name: NonEmptyString| move |age: PositiveInt| (name, age))
//!     .apply(NonEmptyString::named("", "name"))
//!     .apply(PositiveInt::named(-1, "age"));
//!
//! let errors = user.unwrap_err();
//! assert_eq!(errors.len().get(), 2);
//! ```

use crate::non_empty_seq::NonEmptySeq;

/// Start an accumulating chain from a curried function.
pub const fn lift<F, E>(f: F) -> Result<F, NonEmptySeq<E>> {
    Ok(f)
}

/// Apply a wrapped function to a wrapped argument, accumulating failures.
pub trait Apply<F, E> {
    /// Feed an argument that carries a single error.
    fn apply<T, U>(self, x: Result<T, E>) -> Result<U, NonEmptySeq<E>>
    where
        F: FnOnce(T) -> U;

    /// Feed an argument that already carries accumulated errors.
    fn apply_all<T, U>(self, x: Result<T, NonEmptySeq<E>>) -> Result<U, NonEmptySeq<E>>
    where
        F: FnOnce(T) -> U;
}

impl<F, E> Apply<F, E> for Result<F, NonEmptySeq<E>> {
    fn apply<T, U>(self, x: Result<T, E>) -> Result<U, NonEmptySeq<E>>
    where
        F: FnOnce(T) -> U,
    {
        self.apply_all(x.map_err(NonEmptySeq::singleton))
    }

    fn apply_all<T, U>(self, x: Result<T, NonEmptySeq<E>>) -> Result<U, NonEmptySeq<E>>
    where
        F: FnOnce(T) -> U,
    {
        match (self, x) {
            (Ok(f), Ok(value)) => Ok(f(value)),
            (Err(left), Err(right)) => Err(left.concat(right)),
            (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        }
    }
}
