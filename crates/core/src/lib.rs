//! # Bastion Core
//!
//! Domain primitives for Railway-Oriented Programming.
//!
//! - [`ResultExt`] and [`Apply`] extend `std::result::Result` with a functor,
//!   monad and error-accumulating applicative algebra.
//! - [`PositiveInt`], [`NonEmptyString`] and [`NonEmptySeq`] can only be built
//!   through validating constructors.
//! - [`Untrusted`] forces a validation step before raw input is used.
//! - [`ReadOnce`] yields its value to exactly one reader, lock-free.

pub mod apply;
pub mod error;
pub mod non_empty_seq;
pub mod non_empty_string;
pub mod positive_int;
pub mod predicate;
pub mod prelude;
pub mod read_once;
pub mod result;
pub mod untrusted;

pub use apply::{Apply, lift};
pub use error::{Error, Result};
pub use non_empty_seq::NonEmptySeq;
pub use non_empty_string::NonEmptyString;
pub use positive_int::PositiveInt;
pub use read_once::{ReadOnce, read_once};
pub use result::{ResultExt, attempt, flatten, flatten_error};
pub use untrusted::{Untrusted, Verdict};
