//! Binary search over an ascending slice.
//!
//! ## Purpose
//!
//! This module locates a value in a slice that is already sorted in
//! ascending order. An absent value yields the [`NOT_FOUND`] sentinel rather
//! than an error.
//!
//! ## Design notes
//!
//! * **Window**: Inclusive `[low, high]` bounds with `mid = low + (high - low) / 2`.
//! * **Duplicates**: Under [`MatchPolicy::Any`] the first midpoint that hits is
//!   returned, which may be any of several equal positions. `Leftmost` and
//!   `Rightmost` keep narrowing after a hit.
//!
//! ## Invariants
//!
//! * A returned index `i != NOT_FOUND` always satisfies `sorted[i] == value`.
//! * The input slice must be non-decreasing; otherwise the result is unspecified.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::numeric::Numeric;

/// Sentinel returned when the value does not occur.
pub const NOT_FOUND: isize = -1;

// ============================================================================
// Match Policy
// ============================================================================

/// Which index to report when several positions hold the searched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Return the first matching midpoint; no guarantee which duplicate it is.
    #[default]
    Any,

    /// Return the lowest matching index.
    Leftmost,

    /// Return the highest matching index.
    Rightmost,
}

// ============================================================================
// Search Function
// ============================================================================

/// Search `sorted` for `value`, returning its index or [`NOT_FOUND`].
pub fn binary_search<T: Numeric>(sorted: &[T], value: T, policy: MatchPolicy) -> isize {
    if !value.is_comparable() {
        return NOT_FOUND;
    }

    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;
    let mut found = NOT_FOUND;

    while low <= high {
        let mid = low + (high - low) / 2;

        match value.compare(&sorted[mid as usize]) {
            Ordering::Equal => {
                found = mid;
                match policy {
                    MatchPolicy::Any => return mid,
                    MatchPolicy::Leftmost => high = mid - 1,
                    MatchPolicy::Rightmost => low = mid + 1,
                }
            }
            Ordering::Less => high = mid - 1,
            Ordering::Greater => low = mid + 1,
        }
    }

    found
}
