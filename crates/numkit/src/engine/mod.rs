//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer owns collection state: it validates input, keeps the private
//! copy of the values, drives the sort transition and produces summaries.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// The collection type and its configuration.
pub mod collection;

/// Summary output.
pub mod output;

/// Sort state machine.
pub mod state;

/// Input validation.
pub mod validator;
