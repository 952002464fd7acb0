//! Test generation, verification and run control.
//!
//! This module contains the pieces that drive a target through the AMO
//! tests. It provides:
//! 1. **Generator:** Seeded xorshift32 operand stream.
//! 2. **Reference:** The independent model of each operation's result.
//! 3. **Verifier:** Per-case store / fence / AMO / fence / load sequence.
//! 4. **Harness:** Capability check and the run over all nine kinds.

/// Harness state machine and top-level run.
pub mod harness;

/// Xorshift32 operand generator.
pub mod prng;

/// Reference model of the AMO results.
pub mod reference;

/// Test case execution and comparison.
pub mod verifier;

pub use harness::{Harness, HarnessState};
pub use prng::Xorshift32;
pub use reference::{ReferenceFn, reference};
pub use verifier::{Observed, Outcome, TestCase, Verifier};
