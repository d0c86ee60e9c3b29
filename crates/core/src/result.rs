//! Extension traits turning `std::result::Result` into a full success/failure algebra.
//!
//! Provides functor, monad and zip/join combinators for both the success and the
//! failure side, safe and fail-fast accessors, and opt-in side-effect taps.
//! Error-accumulating composition lives in [`crate::apply`].
//!
//! # Examples
//!
//! ```
//! use bastion_core::ResultExt;
//!
//! let parsed: Result<i32, String> = Ok(20);
//! let doubled = parsed
//!     .select(|n| n * 2)
//!     .select_many(|n| if n > 0 { Ok(n) } else { Err("not positive".to_string()) });
//! assert_eq!(doubled, Ok(40));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::non_empty_seq::NonEmptySeq;

/// Combinators over the success and failure sides of a `Result`.
///
/// Every method consumes the result and produces a new one; nothing is
/// mutated in place.
pub trait ResultExt<T, E>: Sized {
    /// Map the success payload, passing a failure through unchanged.
    fn select<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E>;

    /// Map the failure payload, passing a success through unchanged.
    fn select_error<E2, F: FnOnce(E) -> E2>(self, f: F) -> Result<T, E2>;

    /// Replace a success with `f(value)`; a failure short-circuits.
    fn select_many<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E>;

    /// Replace a failure with `f(error)`; a success short-circuits.
    fn select_many_error<E2, F: FnOnce(E) -> Result<T, E2>>(self, f: F) -> Result<T, E2>;

    /// Perform a side effect on the success payload without consuming the Result.
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Perform a side effect on the failure payload without consuming the Result.
    fn tap_error<F: FnOnce(&E)>(self, f: F) -> Self;

    /// Fold the success payload into `seed`; a failure returns `seed` untouched.
    fn fold_ok<A, F: FnOnce(A, T) -> A>(self, seed: A, f: F) -> A;

    /// Fold the failure payload into `seed`; a success returns `seed` untouched.
    fn fold_error<A, F: FnOnce(A, E) -> A>(self, seed: A, f: F) -> A;

    /// Combine two successes with `f`.
    ///
    /// The first failure met, left operand first, is propagated as is.
    /// Unlike [`crate::Apply`] this never accumulates errors.
    fn zip_with<U, V, F: FnOnce(T, U) -> V>(self, other: Result<U, E>, f: F) -> Result<V, E>;

    /// Combine two failures with `f`.
    ///
    /// The first success met, left operand first, is propagated as is.
    fn zip_error_with<E2, E3, F: FnOnce(E, E2) -> E3>(
        self,
        other: Result<T, E2>,
        f: F,
    ) -> Result<T, E3>;

    /// Combine two successes whose projected keys are equal.
    ///
    /// Failures propagate like [`ResultExt::zip_with`]. When both sides succeed
    /// but the keys differ, `mismatch` builds the failure from the two keys.
    fn join_on<U, V, K, KL, KR, F, M>(
        self,
        other: Result<U, E>,
        key_left: KL,
        key_right: KR,
        combine: F,
        mismatch: M,
    ) -> Result<V, E>
    where
        K: PartialEq,
        KL: FnOnce(&T) -> K,
        KR: FnOnce(&U) -> K,
        F: FnOnce(T, U) -> V,
        M: FnOnce(K, K) -> E;

    /// Combine two failures whose projected keys are equal.
    ///
    /// Successes propagate like [`ResultExt::zip_error_with`]. When both sides
    /// fail but the keys differ, `mismatch` builds the success from the two keys.
    fn join_error_on<E2, E3, K, KL, KR, F, M>(
        self,
        other: Result<T, E2>,
        key_left: KL,
        key_right: KR,
        combine: F,
        mismatch: M,
    ) -> Result<T, E3>
    where
        K: PartialEq,
        KL: FnOnce(&E) -> K,
        KR: FnOnce(&E2) -> K,
        F: FnOnce(E, E2) -> E3,
        M: FnOnce(K, K) -> T;

    /// Convert the success payload into a related type.
    fn cast<U>(self) -> Result<U, E>
    where
        T: Into<U>;

    /// Convert the failure payload into a related type.
    fn cast_error<E2>(self) -> Result<T, E2>
    where
        E: Into<E2>;

    /// Success payload of a result already known to be `Ok`.
    ///
    /// # Panics
    ///
    /// Panics when called on an `Err`, reporting the error value. This is a
    /// misuse guard for call sites that have already branched on the case.
    fn unsafe_get_ok(self) -> T
    where
        E: fmt::Debug;

    /// Failure payload of a result already known to be `Err`.
    ///
    /// # Panics
    ///
    /// Panics when called on an `Ok`, reporting the success value.
    fn unsafe_get_error(self) -> E
    where
        T: fmt::Debug;

    /// Success payload as an `Option`, discarding any failure.
    fn get_ok(self) -> Option<T>;

    /// Failure payload as an `Option`, discarding any success.
    fn get_error(self) -> Option<E>;

    /// Success payload, or the value produced by `f`.
    fn get_ok_or_else<F: FnOnce() -> T>(self, f: F) -> T;

    /// Failure payload, or the value produced by `f`.
    fn get_error_or_else<F: FnOnce() -> E>(self, f: F) -> E;

    /// Fold both cases into a single type.
    fn get_ok_or_error<R, F, G>(self, ok_fn: F, err_fn: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R;

    /// Normalize the failure into a one-element error sequence, ready for
    /// [`crate::Apply`].
    fn accumulate(self) -> Result<T, NonEmptySeq<E>>;

    /// Convert to an `Option`, logging the discarded error.
    fn into_option_logged(self) -> Option<T>
    where
        E: fmt::Display;

    /// Get the value or a default, logging the discarded error.
    fn or_default_logged(self, default: T) -> T
    where
        E: fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn select<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        match self {
            Ok(value) => Ok(f(value)),
            Err(error) => Err(error),
        }
    }

    fn select_error<E2, F: FnOnce(E) -> E2>(self, f: F) -> Result<T, E2> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(error)),
        }
    }

    fn select_many<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    fn select_many_error<E2, F: FnOnce(E) -> Result<T, E2>>(self, f: F) -> Result<T, E2> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => f(error),
        }
    }

    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref value) = self {
            f(value);
        }
        self
    }

    fn tap_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref error) = self {
            f(error);
        }
        self
    }

    fn fold_ok<A, F: FnOnce(A, T) -> A>(self, seed: A, f: F) -> A {
        match self {
            Ok(value) => f(seed, value),
            Err(_) => seed,
        }
    }

    fn fold_error<A, F: FnOnce(A, E) -> A>(self, seed: A, f: F) -> A {
        match self {
            Ok(_) => seed,
            Err(error) => f(seed, error),
        }
    }

    fn zip_with<U, V, F: FnOnce(T, U) -> V>(self, other: Result<U, E>, f: F) -> Result<V, E> {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(f(left, right)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }

    fn zip_error_with<E2, E3, F: FnOnce(E, E2) -> E3>(
        self,
        other: Result<T, E2>,
        f: F,
    ) -> Result<T, E3> {
        match (self, other) {
            (Err(left), Err(right)) => Err(f(left, right)),
            (Ok(value), _) | (Err(_), Ok(value)) => Ok(value),
        }
    }

    fn join_on<U, V, K, KL, KR, F, M>(
        self,
        other: Result<U, E>,
        key_left: KL,
        key_right: KR,
        combine: F,
        mismatch: M,
    ) -> Result<V, E>
    where
        K: PartialEq,
        KL: FnOnce(&T) -> K,
        KR: FnOnce(&U) -> K,
        F: FnOnce(T, U) -> V,
        M: FnOnce(K, K) -> E,
    {
        match (self, other) {
            (Ok(left), Ok(right)) => {
                let (lk, rk) = (key_left(&left), key_right(&right));
                if lk == rk {
                    Ok(combine(left, right))
                } else {
                    Err(mismatch(lk, rk))
                }
            }
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }

    fn join_error_on<E2, E3, K, KL, KR, F, M>(
        self,
        other: Result<T, E2>,
        key_left: KL,
        key_right: KR,
        combine: F,
        mismatch: M,
    ) -> Result<T, E3>
    where
        K: PartialEq,
        KL: FnOnce(&E) -> K,
        KR: FnOnce(&E2) -> K,
        F: FnOnce(E, E2) -> E3,
        M: FnOnce(K, K) -> T,
    {
        match (self, other) {
            (Err(left), Err(right)) => {
                let (lk, rk) = (key_left(&left), key_right(&right));
                if lk == rk {
                    Err(combine(left, right))
                } else {
                    Ok(mismatch(lk, rk))
                }
            }
            (Ok(value), _) | (Err(_), Ok(value)) => Ok(value),
        }
    }

    fn cast<U>(self) -> Result<U, E>
    where
        T: Into<U>,
    {
        self.select(Into::into)
    }

    fn cast_error<E2>(self) -> Result<T, E2>
    where
        E: Into<E2>,
    {
        self.select_error(Into::into)
    }

    #[track_caller]
    #[allow(clippy::panic)]
    fn unsafe_get_ok(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(value) => value,
            Err(error) => panic!("the result is an error with value: {error:?}"),
        }
    }

    #[track_caller]
    #[allow(clippy::panic)]
    fn unsafe_get_error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Ok(value) => panic!("the result is ok with value: {value:?}"),
            Err(error) => error,
        }
    }

    fn get_ok(self) -> Option<T> {
        self.fold_ok(None, |_, value| Some(value))
    }

    fn get_error(self) -> Option<E> {
        self.fold_error(None, |_, error| Some(error))
    }

    fn get_ok_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.get_ok_or_error(|value| value, |_| f())
    }

    fn get_error_or_else<F: FnOnce() -> E>(self, f: F) -> E {
        self.get_ok_or_error(|_| f(), |error| error)
    }

    fn get_ok_or_error<R, F, G>(self, ok_fn: F, err_fn: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => ok_fn(value),
            Err(error) => err_fn(error),
        }
    }

    fn accumulate(self) -> Result<T, NonEmptySeq<E>> {
        self.select_error(NonEmptySeq::singleton)
    }

    fn into_option_logged(self) -> Option<T>
    where
        E: fmt::Display,
    {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T
    where
        E: fmt::Display,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

/// Collapse a success that itself holds a result.
pub fn flatten<T, E>(nested: Result<Result<T, E>, E>) -> Result<T, E> {
    nested.select_many(|inner| inner)
}

/// Collapse a failure that itself holds a result.
pub fn flatten_error<T, E>(nested: Result<T, Result<T, E>>) -> Result<T, E> {
    nested.select_many_error(|inner| inner)
}

/// Run `f(input)`, converting a panic raised with an `E` payload into `Err`.
///
/// Only payloads of exactly type `E` (raised with [`std::panic::panic_any`])
/// are converted. Any other panic keeps unwinding to the caller unchanged.
///
/// The typed failure still travels as a real panic, so the installed panic
/// hook runs before it is caught. With the default hook that means a
/// `panicked at` report on stderr even when `attempt` returns `Err`.
///
/// # Examples
///
/// ```
/// use bastion_core::attempt;
///
/// #[derive(Debug, PartialEq)]
/// struct Overflow;
///
/// let result = attempt::<_, _, Overflow, _>(u8::MAX, |n| {
///     n.checked_add(1).unwrap_or_else(|| std::panic::panic_any(Overflow))
/// });
/// assert_eq!(result, Err(Overflow));
/// ```
pub fn attempt<I, T, E, F>(input: I, f: F) -> Result<T, E>
where
    E: Any + Send,
    F: FnOnce(I) -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(|| f(input))) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => {
                tracing::debug!(
                    error_type = std::any::type_name::<E>(),
                    "converted typed failure into error"
                );
                Err(*error)
            }
            Err(other) => panic::resume_unwind(other),
        },
    }
}
