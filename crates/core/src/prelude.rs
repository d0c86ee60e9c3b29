//! Prelude module - common imports for validated domain modelling
//!
//! ```rust
//! use bastion_core::prelude::*;
//! ```

// Re-export the Result algebra
pub use crate::apply::{Apply, lift};
pub use crate::result::{ResultExt, attempt, flatten, flatten_error};

// Re-export error types
pub use crate::error::Error;

// Re-export domain types
pub use crate::non_empty_seq::NonEmptySeq;
pub use crate::non_empty_string::NonEmptyString;
pub use crate::positive_int::PositiveInt;
pub use crate::read_once::{ReadOnce, read_once};
pub use crate::untrusted::{Untrusted, Verdict};

// Re-export predicate helpers
pub use crate::predicate::Predicate;
