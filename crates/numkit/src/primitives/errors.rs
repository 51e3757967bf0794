//! Error types for numeric collection operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! numeric collection or querying it, including empty input, missing
//! positional arguments, and values that cannot be ordered.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending position or parameter name.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Empty collections**: A sequence with no usable elements.
//! 2. **Missing scalars**: A single absent argument to a fixed-arity helper.
//! 3. **Unorderable values**: NaN breaks the total ordering the engine relies on.
//! 4. **Builder misuse**: A configuration option set more than once.
//!
//! ## Non-goals
//!
//! * A "not found" search outcome is not an error; `binary_search` returns
//!   the [`NOT_FOUND`](crate::algorithms::search::NOT_FOUND) sentinel instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numeric collection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumkitError {
    /// The sequence is empty or every value in it is absent.
    EmptyInput,

    /// A positional argument of a fixed-arity helper is absent.
    MissingElement {
        /// 1-based position of the first absent argument.
        position: usize,
        /// Number of arguments the helper takes.
        arity: usize,
    },

    /// A value cannot take part in the ordering (NaN).
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumkitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Array must not be empty or contain only absent values")
            }
            Self::MissingElement { position, arity } => {
                write!(f, "Missing element: argument {position} of {arity} is absent")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumkitError {}
