//! Common types used throughout the harness.
//!
//! This module provides the building blocks shared by the targets, the verifier
//! and the reporter. It includes:
//! 1. **Constants:** Default seed, case count, word size and console markers.
//! 2. **Error Handling:** Architectural traps and harness-level errors.

/// Common constants used throughout the harness.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use constants::{DEFAULT_NUM_CASES, DEFAULT_SEED, WORD_BYTES};
pub use error::{HarnessError, Trap};
