//! Simulated hart implementation.
//!
//! This module contains a small RV32 hart model whose only job is to execute
//! the memory instructions the harness issues: plain word loads and stores
//! (through a store buffer), FENCE, and the nine word AMOs.

/// Architecture-specific components (CSRs, register file).
pub mod arch;

/// Hart core: architectural state plus load/store/AMO execution.
pub mod cpu;

/// Execution units (load/store unit).
pub mod units;

pub use self::cpu::Hart;
