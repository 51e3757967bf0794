//! Sort state of a collection.
//!
//! A collection starts [`SortState::Unsorted`] and moves to
//! [`SortState::Sorted`] the first time a sorted view is needed. `Sorted` is
//! terminal: the backing values never change after construction, so the
//! cached copy is never invalidated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Two-state cache of the ascending copy.
#[derive(Debug, Clone, PartialEq)]
pub enum SortState<T> {
    /// No sorted copy exists yet.
    Unsorted,

    /// The ascending copy, owned by the collection.
    Sorted(Vec<T>),
}

impl<T> Default for SortState<T> {
    fn default() -> Self {
        Self::Unsorted
    }
}

impl<T> SortState<T> {
    /// Whether the transition to `Sorted` has happened.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted(_))
    }

    /// The cached ascending copy, if present.
    #[inline]
    pub fn sorted(&self) -> Option<&[T]> {
        match self {
            Self::Sorted(values) => Some(values),
            Self::Unsorted => None,
        }
    }
}
