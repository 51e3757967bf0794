//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the numeric capability trait and the shared error
//! type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Numeric capability set.
pub mod numeric;

/// Shared error types.
pub mod errors;
