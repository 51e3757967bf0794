//! Iterative quicksort with an explicit range stack.
//!
//! ## Purpose
//!
//! This module sorts a buffer in place in ascending order without recursion.
//! Pending work is kept as [`Range`] items on a LIFO stack, so call-stack
//! depth stays constant regardless of input size.
//!
//! ## Design notes
//!
//! * **Partitioning**: Lomuto scheme with the last element of each range as pivot.
//! * **Scheduling**: The left range is pushed before the right one, so the
//!   right range is processed first.
//! * **Instability**: Equal elements may be reordered.
//!
//! ## Key concepts
//!
//! ### Lomuto partition
//! 1. Take `buf[high]` as the pivot.
//! 2. Walk `j` over `low..high`, swapping every element `<= pivot` into the
//!    next slot of the "small" prefix.
//! 3. Swap the pivot into the slot right after that prefix and return its index.
//!
//! ### Complexity
//! * Expected O(n log n) time, O(log n) stack depth.
//! * Worst case O(n²) time and O(n) stack depth on sorted or reverse-sorted
//!   input, since the last-element pivot then splits every range unevenly.
//!
//! ## Invariants
//!
//! * After partitioning `[low, high]` around index `p`: every element in
//!   `[low, p)` is `<= buf[p]` and every element in `(p, high]` is `> buf[p]`.
//! * Only ranges with `low < high` are ever partitioned.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::numeric::Numeric;

// ============================================================================
// Data Structures
// ============================================================================

/// An inclusive `[low, high]` slice of the buffer awaiting partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// First index of the range.
    pub low: usize,

    /// Last index of the range (inclusive).
    pub high: usize,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Whether the range holds at least two elements.
    #[inline]
    pub fn needs_partition(&self) -> bool {
        self.low < self.high
    }
}

/// Work counters collected while sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    /// Number of partition passes performed.
    pub partitions: usize,

    /// Largest number of ranges waiting on the stack at once.
    pub peak_stack_depth: usize,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort `buf` in ascending order using iterative quicksort.
pub fn quicksort_iterative<T: Numeric>(buf: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    if buf.len() < 2 {
        return stats;
    }

    let mut stack: Vec<Range> = Vec::new();
    stack.push(Range::new(0, buf.len() - 1));
    stats.peak_stack_depth = 1;

    while let Some(range) = stack.pop() {
        if !range.needs_partition() {
            continue;
        }

        let pivot = partition(buf, range.low, range.high);
        stats.partitions += 1;

        // Empty sides are never pushed, which also keeps `pivot - 1` from underflowing
        if pivot > range.low {
            stack.push(Range::new(range.low, pivot - 1));
        }
        if pivot < range.high {
            stack.push(Range::new(pivot + 1, range.high));
        }

        stats.peak_stack_depth = stats.peak_stack_depth.max(stack.len());
    }

    stats
}

/// Partition `buf[low..=high]` around `buf[high]` and return the pivot's final index.
pub fn partition<T: Numeric>(buf: &mut [T], low: usize, high: usize) -> usize {
    let pivot = buf[high];

    // Next free slot of the "<= pivot" prefix
    let mut store = low;

    for j in low..high {
        if buf[j].compare(&pivot) != Ordering::Greater {
            buf.swap(store, j);
            store += 1;
        }
    }

    buf.swap(store, high);
    store
}

/// Check whether `values` is already in non-decreasing order.
#[inline]
pub fn is_non_decreasing<T: Numeric>(values: &[T]) -> bool {
    values
        .windows(2)
        .all(|w| w[0].compare(&w[1]) != Ordering::Greater)
}
