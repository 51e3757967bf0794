//! Extremum and average computation.
//!
//! ## Purpose
//!
//! This module provides the stateless queries over a fixed sequence:
//! maximum, minimum and arithmetic mean, plus the fixed-arity helpers
//! [`max_of_three`] and [`min_of_five`].
//!
//! ## Design notes
//!
//! * **Single pass**: Every sequence query is one linear scan, O(n) time and
//!   O(1) extra space.
//! * **Ties**: The first extremal element in sequence order is returned.
//! * **Failure modes**: An empty sequence fails with `EmptyInput`; an
//!   absent positional argument fails with `MissingElement`; a NaN anywhere
//!   fails with `InvalidNumericValue` before any comparison runs.
//!
//! ## Invariants
//!
//! * Minimum is the maximum under the reversed ordering.
//! * The average is computed in `f64` regardless of the element type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::NumkitError;
use crate::primitives::numeric::Numeric;

// ============================================================================
// Extremum Direction
// ============================================================================

/// Which end of the ordering to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extremum {
    /// Largest element under the natural ordering.
    #[default]
    Maximum,

    /// Smallest element, i.e. the largest under the reversed ordering.
    Minimum,
}

impl Extremum {
    /// The ordering a candidate must have against the current best to replace it.
    #[inline]
    fn winning_ordering(&self) -> Ordering {
        match self {
            Self::Maximum => Ordering::Greater,
            Self::Minimum => Ordering::Less,
        }
    }

    /// Whether `candidate` strictly beats `current`.
    #[inline]
    pub fn prefers<T: Numeric>(&self, candidate: &T, current: &T) -> bool {
        candidate.compare(current) == self.winning_ordering()
    }

    /// Find the extremal element of `values`.
    pub fn find<T: Numeric>(&self, values: &[T]) -> Result<T, NumkitError> {
        let (&first, rest) = values.split_first().ok_or(NumkitError::EmptyInput)?;
        ensure_comparable(values)?;

        let mut best = first;
        for value in rest {
            // Strict comparison keeps the earliest of equal candidates
            if self.prefers(value, &best) {
                best = *value;
            }
        }

        Ok(best)
    }
}

// ============================================================================
// Sequence Queries
// ============================================================================

/// Largest element of `values`; ties return the first occurrence.
#[inline]
pub fn maximum<T: Numeric>(values: &[T]) -> Result<T, NumkitError> {
    Extremum::Maximum.find(values)
}

/// Smallest element of `values`; ties return the first occurrence.
#[inline]
pub fn minimum<T: Numeric>(values: &[T]) -> Result<T, NumkitError> {
    Extremum::Minimum.find(values)
}

/// Arithmetic mean of `values` as `f64`.
pub fn average<T: Numeric>(values: &[T]) -> Result<f64, NumkitError> {
    if values.is_empty() {
        return Err(NumkitError::EmptyInput);
    }
    ensure_comparable(values)?;

    let sum: f64 = values.iter().map(Numeric::as_f64).sum();
    Ok(sum / values.len() as f64)
}

/// Reject the first unorderable element of `values`.
fn ensure_comparable<T: Numeric>(values: &[T]) -> Result<(), NumkitError> {
    match values.iter().position(|v| !v.is_comparable()) {
        Some(i) => Err(NumkitError::InvalidNumericValue(format!(
            "values[{}]={:?}",
            i, values[i]
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// Fixed-Arity Helpers
// ============================================================================

/// Largest of three values; fails if any argument is absent.
pub fn max_of_three<T: Numeric>(
    first: Option<T>,
    second: Option<T>,
    third: Option<T>,
) -> Result<T, NumkitError> {
    fixed_extreme(Extremum::Maximum, &[first, second, third])
}

/// Smallest of five values; fails if any argument is absent.
pub fn min_of_five<T: Numeric>(
    first: Option<T>,
    second: Option<T>,
    third: Option<T>,
    fourth: Option<T>,
    fifth: Option<T>,
) -> Result<T, NumkitError> {
    fixed_extreme(Extremum::Minimum, &[first, second, third, fourth, fifth])
}

/// Shared body of the fixed-arity helpers.
fn fixed_extreme<T: Numeric>(extremum: Extremum, args: &[Option<T>]) -> Result<T, NumkitError> {
    let arity = args.len();
    let mut best: Option<T> = None;

    for (i, arg) in args.iter().enumerate() {
        let value = arg.ok_or(NumkitError::MissingElement {
            position: i + 1,
            arity,
        })?;

        if !value.is_comparable() {
            return Err(NumkitError::InvalidNumericValue(format!(
                "argument {} of {} is {:?}",
                i + 1,
                arity,
                value
            )));
        }

        best = match best {
            Some(current) if !extremum.prefers(&value, &current) => Some(current),
            _ => Some(value),
        };
    }

    best.ok_or(NumkitError::EmptyInput)
}
