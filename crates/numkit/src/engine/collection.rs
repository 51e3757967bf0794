//! The numeric collection engine.
//!
//! ## Purpose
//!
//! [`NumericCollection`] owns a private copy of the caller's values and
//! answers descriptive queries (maximum, minimum, average) directly from it.
//! Sorting and searching go through a lazily built ascending copy held in
//! [`SortState`].
//!
//! ## Design notes
//!
//! * **Ownership**: The caller's slice is copied once at construction and
//!   never touched again.
//! * **Lazy sort**: The first `sort()` or `binary_search()` builds the sorted
//!   copy; later calls reuse it.
//! * **Exclusive access**: Sorting needs `&mut self`, so sharing a collection
//!   across threads requires external locking.
//!
//! ## Invariants
//!
//! * The collection always holds at least one value, and none of them is NaN.
//! * Once `Sorted`, the state never returns to `Unsorted`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::algorithms::extremum;
use crate::algorithms::quicksort::{is_non_decreasing, quicksort_iterative};
use crate::algorithms::search::{self, MatchPolicy};
use crate::engine::output::Summary;
use crate::engine::state::SortState;
use crate::engine::validator::Validator;
use crate::primitives::errors::NumkitError;
use crate::primitives::numeric::Numeric;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved options a collection is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionConfig {
    /// Which duplicate index `binary_search` reports.
    pub match_policy: MatchPolicy,

    /// Skip partitioning when the values are already non-decreasing.
    pub presorted_check: bool,
}

// ============================================================================
// Collection
// ============================================================================

/// A non-empty sequence of numbers with cached sorting and searching.
#[derive(Debug, Clone)]
pub struct NumericCollection<T> {
    values: Vec<T>,
    state: SortState<T>,
    config: CollectionConfig,
}

#[allow(clippy::len_without_is_empty)]
impl<T: Numeric> NumericCollection<T> {
    /// Build a collection from `values` with default options.
    pub fn new(values: &[T]) -> Result<Self, NumkitError> {
        Self::with_config(values, CollectionConfig::default())
    }

    /// Build a collection from values that may be absent.
    ///
    /// Absent entries are dropped; the remaining values keep their order.
    pub fn from_options(values: &[Option<T>]) -> Result<Self, NumkitError> {
        Validator::validate_options(values)?;

        let present: Vec<T> = values.iter().flatten().copied().collect();
        Ok(Self::from_validated(present, CollectionConfig::default()))
    }

    /// Build a collection from `values` with explicit options.
    pub fn with_config(values: &[T], config: CollectionConfig) -> Result<Self, NumkitError> {
        Validator::validate_values(values)?;
        Ok(Self::from_validated(values.to_vec(), config))
    }

    fn from_validated(values: Vec<T>, config: CollectionConfig) -> Self {
        Self {
            values,
            state: SortState::Unsorted,
            config,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values in their original order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Current sort state.
    #[inline]
    pub fn state(&self) -> &SortState<T> {
        &self.state
    }

    /// Whether the sorted copy has been built.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.state.is_sorted()
    }

    /// Options this collection was built with.
    #[inline]
    pub fn config(&self) -> CollectionConfig {
        self.config
    }

    // ========================================================================
    // Descriptive Queries
    // ========================================================================

    /// Largest value; ties return the first occurrence.
    pub fn maximum(&self) -> Result<T, NumkitError> {
        extremum::maximum(&self.values)
    }

    /// Smallest value; ties return the first occurrence.
    pub fn minimum(&self) -> Result<T, NumkitError> {
        extremum::minimum(&self.values)
    }

    /// Arithmetic mean as `f64`.
    pub fn average(&self) -> Result<f64, NumkitError> {
        extremum::average(&self.values)
    }

    /// Snapshot of count, extrema and mean.
    pub fn summary(&self) -> Result<Summary<T>, NumkitError> {
        Ok(Summary {
            count: self.len(),
            minimum: self.minimum()?,
            maximum: self.maximum()?,
            average: self.average()?,
            sorted: self.is_sorted(),
        })
    }

    // ========================================================================
    // Sorting and Searching
    // ========================================================================

    /// Ascending copy of the values.
    ///
    /// The copy is built on the first call and returned from the cache
    /// afterwards. The original order stays available through [`values`](Self::values).
    pub fn sort(&mut self) -> &[T] {
        match self.state {
            SortState::Sorted(ref sorted) => sorted,
            SortState::Unsorted => {
                self.state = SortState::Sorted(self.build_sorted_copy());
                self.sort()
            }
        }
    }

    /// Index of `value` in the sorted copy, or [`NOT_FOUND`](search::NOT_FOUND).
    ///
    /// Sorts first if needed. With duplicates and the default
    /// [`MatchPolicy::Any`], any index holding `value` may be returned.
    pub fn binary_search(&mut self, value: T) -> isize {
        let policy = self.config.match_policy;
        let index = search::binary_search(self.sort(), value, policy);
        trace!("binary_search({:?}) -> {} ({:?})", value, index, policy);
        index
    }

    fn build_sorted_copy(&self) -> Vec<T> {
        let mut buffer = self.values.clone();

        if self.config.presorted_check && is_non_decreasing(&buffer) {
            debug!(
                "sort: {} values already in order, skipping partitioning",
                buffer.len()
            );
            return buffer;
        }

        let stats = quicksort_iterative(&mut buffer);
        debug!(
            "sort: {} values, {} partitions, peak stack depth {}",
            buffer.len(),
            stats.partitions,
            stats.peak_stack_depth
        );
        buffer
    }
}
