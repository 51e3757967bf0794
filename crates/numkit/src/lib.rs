//! # numkit — generic numeric collections for Rust
//!
//! Extrema, averages, an iterative quicksort and a cached binary search over
//! any primitive numeric type.
//!
//! ## What does it do?
//!
//! A [`NumericCollection`](prelude::NumericCollection) wraps a non-empty
//! sequence of numbers. Descriptive queries (maximum, minimum, average) are
//! single linear passes over the original values. Sorting builds an ascending
//! copy once, using a non-recursive quicksort with Lomuto partitioning, and
//! every later sort or search reuses that copy.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let mut numbers = NumericCollection::new(&[5, 3, 5, 1, 2])?;
//!
//! assert_eq!(numbers.maximum()?, 5);
//! assert_eq!(numbers.minimum()?, 1);
//! assert!((numbers.average()? - 3.2).abs() < 1e-9);
//!
//! // Sorted once, cached afterwards
//! assert_eq!(numbers.sort(), &[1, 2, 3, 5, 5]);
//! assert_eq!(numbers.binary_search(3), 2);
//! assert_eq!(numbers.binary_search(4), NOT_FOUND);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Configured Use
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let mut numbers = Collection::new()
//!     .match_policy(Leftmost)   // First index among duplicates
//!     .presorted_check(true)    // Skip partitioning for ordered input
//!     .build(&[2.5, 1.0, 2.5, 2.5])?;
//!
//! assert_eq!(numbers.binary_search(2.5), 1);
//! println!("{}", numbers.summary()?);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!   Minimum:     1
//!   Maximum:     2.5
//!   Average:     2.125000
//!   Sorted:      yes
//! ```
//!
//! ### Result and Error Handling
//!
//! Empty input and absent arguments are errors; a value that is not present
//! is not. `binary_search` reports it with the `NOT_FOUND` sentinel (`-1`).
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! assert_eq!(
//!     NumericCollection::<i32>::new(&[]).unwrap_err(),
//!     NumkitError::EmptyInput
//! );
//!
//! assert_eq!(max_of_three(Some(1), Some(2), Some(3))?, 3);
//! assert_eq!(
//!     min_of_five(Some(5), Some(4), None, Some(2), Some(1)),
//!     Err(NumkitError::MissingElement { position: 3, arity: 5 })
//! );
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency; only
//! `alloc` is required.
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", default-features = false }
//! ```
//!
//! ## Decimal Values
//!
//! Enable the `decimal` feature to use `rust_decimal::Decimal` as an element
//! type alongside the primitive integers and floats.
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", features = ["decimal"] }
//! ```
//!
//! ## Logging
//!
//! The sort transition and searches emit `debug`/`trace` records through the
//! [`log`](https://docs.rs/log) facade. No logger is installed by this crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - numeric capability set and errors.
mod primitives;

// Layer 2: Algorithms - extrema, quicksort, binary search.
mod algorithms;

// Layer 3: Engine - collection state and validation.
mod engine;

// High-level fluent API.
mod api;

// Standard numkit prelude.
pub mod prelude {
    pub use crate::api::{
        average, max_of_three, maximum, min_of_five, minimum, CollectionBuilder as Collection,
        CollectionConfig, Extremum, MatchPolicy,
        MatchPolicy::{Any, Leftmost, Rightmost},
        Numeric, NumericCollection, NumkitError, SortState, Summary, NOT_FOUND,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
