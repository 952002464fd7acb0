//! Target trait for atomic memory operations.
//!
//! This module defines the `AtomicTarget` trait implemented by everything the
//! harness can test. It provides:
//! 1. **Capability probe:** `has_atomics`, consulted once before any case runs.
//! 2. **Plain access:** Word `store_word` / `load_word` used to seed and read
//!    back the shared cell.
//! 3. **Ordering:** `fence`, a full barrier no memory access may cross.
//! 4. **Atomic primitive:** `amo_w` plus one named entry point per AMO kind,
//!    each returning the pre-operation word.

use crate::common::Trap;
use crate::isa::rv32a::AmoOp;

/// Contract between the verifier and the thing under test.
///
/// Implementations are expected to perform each AMO as one indivisible
/// read-modify-write; that property is what the harness checks, not something
/// it enforces.
pub trait AtomicTarget {
    /// Returns a short name for this target (e.g., `"sim-hart"`, `"host"`).
    fn name(&self) -> &str;

    /// Returns true if the atomic instruction extension is present.
    fn has_atomics(&self) -> bool;

    /// Returns the address of the shared word the harness should use.
    fn cell_addr(&self) -> u64;

    /// Plain (non-atomic) word store.
    ///
    /// # Errors
    ///
    /// Returns a store misaligned or access fault trap.
    fn store_word(&mut self, addr: u64, val: u32) -> Result<(), Trap>;

    /// Plain (non-atomic) word load.
    ///
    /// # Errors
    ///
    /// Returns a load misaligned or access fault trap.
    fn load_word(&mut self, addr: u64) -> Result<u32, Trap>;

    /// Full execution barrier: no memory access may be reordered across it.
    fn fence(&mut self);

    /// Atomically applies `op` with `operand` to the word at `addr` and
    /// returns the word that was in memory before the operation.
    ///
    /// # Errors
    ///
    /// Returns a trap if the AMO cannot be performed (missing extension,
    /// misaligned or unmapped address).
    fn amo_w(&mut self, op: AmoOp, addr: u64, operand: u32) -> Result<u32, Trap>;

    /// `amoswap.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amoswap_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Swap, addr, operand)
    }

    /// `amoadd.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amoadd_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Add, addr, operand)
    }

    /// `amoand.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amoand_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::And, addr, operand)
    }

    /// `amoor.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amoor_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Or, addr, operand)
    }

    /// `amoxor.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amoxor_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Xor, addr, operand)
    }

    /// `amomax.w` (signed); returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amomax_w(&mut self, addr: u64, operand: i32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Max, addr, operand as u32)
    }

    /// `amomaxu.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amomaxu_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Maxu, addr, operand)
    }

    /// `amomin.w` (signed); returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amomin_w(&mut self, addr: u64, operand: i32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Min, addr, operand as u32)
    }

    /// `amominu.w`; returns the pre-operation word.
    ///
    /// # Errors
    ///
    /// See [`AtomicTarget::amo_w`].
    fn amominu_w(&mut self, addr: u64, operand: u32) -> Result<u32, Trap> {
        self.amo_w(AmoOp::Minu, addr, operand)
    }
}
