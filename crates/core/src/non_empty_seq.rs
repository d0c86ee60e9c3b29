//! Ordered sequence holding at least one element.
//!
//! The input is materialized at construction, so the non-empty guarantee holds
//! for the whole lifetime of the value. A first element is stored apart from
//! the rest, which makes [`NonEmptySeq::first`] total.

use std::fmt;
use std::iter::{Chain, Once};
use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Sequence guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptySeq<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptySeq<T> {
    fn validate(xs: impl IntoIterator<Item = T>, field: Option<&str>) -> Result<Self> {
        let mut xs = xs.into_iter();
        xs.next()
            .map(|head| Self {
                head,
                tail: xs.collect(),
            })
            .ok_or_else(|| Error::empty_sequence(field))
    }

    /// Snapshot `xs`, or `None` when it yields no element.
    pub fn maybe(xs: impl IntoIterator<Item = T>) -> Option<Self> {
        Self::validate(xs, None).ok()
    }

    /// Snapshot `xs`, failing with [`Error::EmptySequence`] when it yields no element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] for an empty input.
    pub fn new(xs: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::validate(xs, None)
    }

    /// Like [`NonEmptySeq::new`], naming `field` in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] for an empty input.
    pub fn named(xs: impl IntoIterator<Item = T>, field: &str) -> Result<Self> {
        Self::validate(xs, Some(field))
    }

    /// Sequence of exactly one element.
    pub fn singleton(x: T) -> Self {
        Self {
            head: x,
            tail: Vec::new(),
        }
    }

    /// Sequence built from a first element and any number of followers.
    pub fn from_parts(head: T, tail: impl IntoIterator<Item = T>) -> Self {
        Self {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    /// First element. Always present.
    #[must_use]
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Last element. Always present.
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Elements after the first.
    #[must_use]
    pub fn rest(&self) -> &[T] {
        &self.tail
    }

    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.tail.len())
    }

    pub fn iter(&self) -> Chain<Once<&T>, std::slice::Iter<'_, T>> {
        self.into_iter()
    }

    /// Apply `f` to every element, preserving order and length.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> NonEmptySeq<U> {
        NonEmptySeq {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Elements of `self` followed by the elements of `other`.
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        let Self { head, mut tail } = self;
        tail.reserve(other.tail.len().saturating_add(1));
        tail.push(other.head);
        tail.extend(other.tail);
        Self { head, tail }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> IntoIterator for NonEmptySeq<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptySeq<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptySeq<T> {
    type Error = Error;

    fn try_from(xs: Vec<T>) -> Result<Self> {
        Self::new(xs)
    }
}

impl<T> From<NonEmptySeq<T>> for Vec<T> {
    fn from(xs: NonEmptySeq<T>) -> Self {
        xs.into_vec()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptySeq<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptySeq<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let xs = Vec::<T>::deserialize(deserializer)?;
        Self::new(xs).map_err(serde::de::Error::custom)
    }
}
