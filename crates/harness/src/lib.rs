//! RISC-V atomic memory operation conformance harness.
//!
//! This crate exercises every 32-bit AMO of the RISC-V "A" extension against a
//! target and checks each result against an independent reference model:
//! 1. **Generator:** A seeded xorshift32 operand stream (`sim::prng`).
//! 2. **Verifier:** One parametrized loop over the nine AMO kinds (`sim::verifier`).
//! 3. **Aggregator:** Per-kind error counts and the pass/fail report (`stats`).
//! 4. **Targets:** A simulated RV32 hart and the host CPU behind one trait (`soc`).
//! 5. **Harness:** The capability-check / run / complete state machine (`sim::harness`).

/// Common types and constants (traps, harness errors, defaults).
pub mod common;
/// Harness configuration (defaults, target selection, JSON loading).
pub mod config;
/// Hart model internals (architectural registers, CSRs, load/store unit).
pub mod core;
/// Instruction set (A-extension encodings, field extraction, disassembly).
pub mod isa;
/// Generator, verifier, reference model, and harness state machine.
pub mod sim;
/// Atomic targets (trait, shared cell, simulated hart, host CPU).
pub mod soc;
/// Per-operation reports and the report aggregator.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The nine 32-bit atomic memory operations.
pub use crate::isa::rv32a::AmoOp;
/// Harness driver; runs all nine kinds against one target.
pub use crate::sim::harness::Harness;
/// Capability and atomic-primitive contract implemented by every target.
pub use crate::soc::AtomicTarget;
/// Final result of a harness run.
pub use crate::stats::Summary;
