//! High-level API for building numeric collections.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! collects options and produces a [`NumericCollection`] from a slice.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every option has a default; `CollectionBuilder::new().build(&v)` just works.
//! * **Validated**: Options and input are validated when `.build()` is called.
//! * **Strict**: Setting the same option twice is reported as an error.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CollectionBuilder`] via `Collection::new()` (prelude alias).
//! 2. Chain configuration methods (`.match_policy()`, `.presorted_check()`).
//! 3. Call `.build(&values)` to validate and construct the collection.

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::extremum::{
    average, max_of_three, maximum, min_of_five, minimum, Extremum,
};
pub use crate::algorithms::search::{MatchPolicy, NOT_FOUND};
pub use crate::engine::collection::{CollectionConfig, NumericCollection};
pub use crate::engine::output::Summary;
pub use crate::engine::state::SortState;
pub use crate::primitives::errors::NumkitError;
pub use crate::primitives::numeric::Numeric;

/// Fluent builder for configuring a numeric collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionBuilder {
    /// Duplicate-match policy for binary search (default: Any).
    pub match_policy: Option<MatchPolicy>,

    /// Skip partitioning for already ordered input (default: false).
    pub presorted_check: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl CollectionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            match_policy: None,
            presorted_check: None,
            duplicate_param: None,
        }
    }

    /// Set which index `binary_search` reports among duplicates.
    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        if self.match_policy.is_some() {
            self.duplicate_param = Some("match_policy");
        }
        self.match_policy = Some(policy);
        self
    }

    /// Enable or disable the already-sorted fast path.
    pub fn presorted_check(mut self, enabled: bool) -> Self {
        if self.presorted_check.is_some() {
            self.duplicate_param = Some("presorted_check");
        }
        self.presorted_check = Some(enabled);
        self
    }

    /// Resolve the options into a configuration, applying defaults.
    pub fn config(&self) -> Result<CollectionConfig, NumkitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(CollectionConfig {
            match_policy: self.match_policy.unwrap_or_default(),
            presorted_check: self.presorted_check.unwrap_or(false),
        })
    }

    /// Validate the options and `values`, then build the collection.
    pub fn build<T: Numeric>(self, values: &[T]) -> Result<NumericCollection<T>, NumkitError> {
        let config = self.config()?;
        NumericCollection::with_config(values, config)
    }
}
