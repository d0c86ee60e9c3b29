//! Validation error types for Railway-Oriented construction of domain values.
//!
//! Validation failures are explicit, typed, and recoverable. They are carried in
//! the `Err` case of a [`Result`] and never raised as panics.

use thiserror::Error;

/// Result of a validating construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Renders the optional field label as a message prefix.
#[allow(clippy::ref_option)]
fn label(field: &Option<String>) -> String {
    field
        .as_deref()
        .map_or_else(String::new, |name| format!("'{name}' "))
}

/// Reason a raw input was rejected by a smart constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error(
        "{}value {value} is less than zero; expected a value greater than or equal to zero",
        label(.field)
    )]
    Negative { field: Option<String>, value: i64 },

    #[error("{}string \"\" is empty; expected at least one character", label(.field))]
    EmptyString { field: Option<String> },

    #[error("{}sequence [] is empty; expected at least one element", label(.field))]
    EmptySequence { field: Option<String> },
}

impl Error {
    /// Create a negative-number error.
    pub fn negative(field: Option<&str>, value: i64) -> Self {
        Self::Negative {
            field: field.map(str::to_owned),
            value,
        }
    }

    /// Create an empty-string error.
    pub fn empty_string(field: Option<&str>) -> Self {
        Self::EmptyString {
            field: field.map(str::to_owned),
        }
    }

    /// Create an empty-sequence error.
    pub fn empty_sequence(field: Option<&str>) -> Self {
        Self::EmptySequence {
            field: field.map(str::to_owned),
        }
    }

    /// Label of the field that failed validation, if one was supplied.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Negative { field, .. }
            | Self::EmptyString { field }
            | Self::EmptySequence { field } => field.as_deref(),
        }
    }
}
