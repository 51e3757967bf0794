//! Input validation for numeric collections.
//!
//! ## Purpose
//!
//! This module checks raw input before a collection is built: the sequence
//! must hold at least one usable value and every value must take part in the
//! ordering.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::NumkitError;
use crate::primitives::numeric::Numeric;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for collection input and builder state.
pub struct Validator;

impl Validator {
    /// Validate a sequence of present values.
    pub fn validate_values<T: Numeric>(values: &[T]) -> Result<(), NumkitError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(NumkitError::EmptyInput);
        }

        // Check 2: Every value is orderable
        for (i, value) in values.iter().enumerate() {
            if !value.is_comparable() {
                return Err(NumkitError::InvalidNumericValue(format!(
                    "values[{}]={:?}",
                    i, value
                )));
            }
        }

        Ok(())
    }

    /// Validate a sequence that may contain absent values.
    ///
    /// Absent entries are allowed as long as at least one value is present.
    pub fn validate_options<T: Numeric>(values: &[Option<T>]) -> Result<(), NumkitError> {
        if values.iter().all(Option::is_none) {
            return Err(NumkitError::EmptyInput);
        }

        for (i, value) in values.iter().enumerate() {
            if let Some(v) = value {
                if !v.is_comparable() {
                    return Err(NumkitError::InvalidNumericValue(format!(
                        "values[{}]={:?}",
                        i, v
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NumkitError> {
        if let Some(param) = duplicate_param {
            return Err(NumkitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
