//! Execution units.
//!
//! The harness only needs the load/store unit: the AMO ALU, fence decoding,
//! alignment checks and the store buffer.

/// Load/Store Unit for memory access operations.
pub mod lsu;
