//! String guaranteed to hold at least one character.

use std::fmt;

use crate::error::{Error, Result};

/// Opaque validated string - guaranteed non-empty if constructed.
///
/// Emptiness is judged by length, so whitespace-only text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    fn validate(text: String, field: Option<&str>) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::empty_string(field));
        }
        Ok(Self(text))
    }

    /// `Some` for non-empty text, `None` otherwise.
    pub fn maybe(text: impl Into<String>) -> Option<Self> {
        Self::validate(text.into(), None).ok()
    }

    /// Validate and create a new non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] for empty text.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::validate(text.into(), None)
    }

    /// Like [`NonEmptyString::new`], naming `field` in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] for empty text.
    pub fn named(text: impl Into<String>, field: &str) -> Result<Self> {
        Self::validate(text.into(), Some(field))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl From<NonEmptyString> for String {
    fn from(text: NonEmptyString) -> Self {
        text.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
