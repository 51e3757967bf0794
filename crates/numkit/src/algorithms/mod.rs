//! Layer 2: Algorithms
//!
//! Extrema and averages, iterative quicksort, and binary search. Everything
//! here is stateless and works on borrowed slices.

/// Maximum, minimum, average and fixed-arity helpers.
pub mod extremum;

/// Iterative Lomuto quicksort.
pub mod quicksort;

/// Binary search with duplicate-match policies.
pub mod search;
