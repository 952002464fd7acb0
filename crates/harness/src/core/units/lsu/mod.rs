//! Load/Store Unit (LSU).
//!
//! This module provides the pieces of the hart's memory pipeline that the
//! AMO harness exercises:
//! - [`atomic`]: Read-modify-write ALU for the RISC-V A extension.
//! - [`ordering`]: FENCE encoding and ordering sets.
//! - [`store_buffer`]: FIFO of plain stores not yet visible in memory.
//! - [`unaligned`]: Alignment checks and misaligned traps.

/// Atomic memory operation ALU (RISC-V A extension).
pub mod atomic;

/// Memory ordering and fence operations.
pub mod ordering;

/// Deferred plain stores.
pub mod store_buffer;

/// Alignment checking.
pub mod unaligned;
