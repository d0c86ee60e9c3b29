//! A cell that hands its value to exactly one reader.
//!
//! The value lives in a pointer-sized atomic slot. The winner is decided by a
//! single atomic swap of that slot to empty, so concurrent readers never block,
//! never both observe the value, and the cell no longer owns it afterwards.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;

/// Holder yielding its value to the first successful [`ReadOnce::read`] only.
pub struct ReadOnce<T> {
    slot: AtomicCell<Option<Box<T>>>,
    consumed: AtomicBool,
}

impl<T> ReadOnce<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: AtomicCell::new(Some(Box::new(value))),
            consumed: AtomicBool::new(false),
        }
    }

    /// Whether some reader has already received the value.
    pub fn is_consumed(&self) -> bool {
        self.consumed.load(Ordering::Acquire)
    }

    /// `Some(value)` for exactly one caller over the lifetime of the cell,
    /// `None` for every other caller, concurrent or not.
    pub fn read(&self) -> Option<T> {
        if self.is_consumed() {
            return None;
        }
        let taken = self.slot.swap(None)?;
        self.consumed.store(true, Ordering::Release);
        tracing::trace!("read-once value consumed");
        Some(*taken)
    }

    /// Move the value out if nobody has read it yet.
    pub fn into_inner(self) -> Option<T> {
        self.slot.into_inner().map(|boxed| *boxed)
    }
}

impl<T> fmt::Debug for ReadOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnce")
            .field("consumed", &self.is_consumed())
            .finish_non_exhaustive()
    }
}

/// Wrap `value` in a zero-argument operation that yields it exactly once.
///
/// # Examples
///
/// ```
/// use bastion_core::read_once;
///
/// let token = read_once("s3cr3t");
/// assert_eq!(token(), Some("s3cr3t"));
/// assert_eq!(token(), None);
/// ```
pub fn read_once<T: Send>(value: T) -> impl Fn() -> Option<T> + Send + Sync {
    let cell = ReadOnce::new(value);
    move || cell.read()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_sequential_reads_yield_once() {
        let cell = ReadOnce::new(String::from("token"));
        assert!(!cell.is_consumed());
        assert_eq!(cell.read(), Some("token".to_string()));
        assert!(cell.is_consumed());
        assert_eq!(cell.read(), None);
        assert_eq!(cell.read(), None);
    }

    #[test]
    fn test_into_inner_respects_consumption() {
        assert_eq!(ReadOnce::new(5).into_inner(), Some(5));

        let cell = ReadOnce::new(5);
        let _ = cell.read();
        assert_eq!(cell.into_inner(), None);
    }

    #[test]
    fn test_read_once_closure() {
        let read = read_once(vec![1, 2]);
        let reads: Vec<_> = (0..4).map(|_| read()).collect();
        assert_eq!(reads, vec![Some(vec![1, 2]), None, None, None]);
    }

    #[test]
    fn test_winning_read_releases_the_value() {
        let secret = Arc::new("hunter2".to_string());
        let cell = ReadOnce::new(Arc::clone(&secret));
        assert_eq!(Arc::strong_count(&secret), 2);

        let winner = cell.read().expect("first read wins");
        drop(winner);

        assert_eq!(Arc::strong_count(&secret), 1);
        assert_eq!(cell.read(), None);
    }

    #[test]
    fn test_works_without_clone() {
        struct Token(u8);

        let cell = ReadOnce::new(Token(9));
        assert_eq!(cell.read().map(|t| t.0), Some(9));
        assert!(cell.read().is_none());
    }

    #[test]
    fn test_debug_hides_value() {
        let cell = ReadOnce::new("hunter2");
        assert_eq!(format!("{cell:?}"), "ReadOnce { consumed: false, .. }");
    }
}
