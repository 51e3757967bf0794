//! Summary output for a numeric collection.
//!
//! ## Purpose
//!
//! This module defines [`Summary`], a snapshot of the descriptive queries of
//! a collection with a human-readable `Display` implementation.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Summary Structure
// ============================================================================

/// Descriptive statistics of a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    /// Number of elements.
    pub count: usize,

    /// Smallest element.
    pub minimum: T,

    /// Largest element.
    pub maximum: T,

    /// Arithmetic mean.
    pub average: f64,

    /// Whether the sorted copy had been built when the summary was taken.
    pub sorted: bool,
}

impl<T: Copy + PartialOrd> Summary<T> {
    /// Whether every element has the same value.
    pub fn is_constant(&self) -> bool {
        self.minimum == self.maximum
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.count)?;
        writeln!(f, "  Minimum:     {}", self.minimum)?;
        writeln!(f, "  Maximum:     {}", self.maximum)?;
        writeln!(f, "  Average:     {:.6}", self.average)?;
        write!(
            f,
            "  Sorted:      {}",
            if self.sorted { "yes" } else { "no" }
        )
    }
}
