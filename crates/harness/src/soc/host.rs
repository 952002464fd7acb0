//! Host-CPU target.
//!
//! Runs the nine AMOs on the machine executing the harness through
//! `std::sync::atomic::AtomicU32`. On a RISC-V host with the A extension the
//! `fetch_*` calls lower to the `amo*.w` instructions themselves; elsewhere
//! they exercise the platform's equivalent RMW instructions.
//!
//! The signed min/max have no `AtomicU32` method, so they go through
//! `fetch_update`, which is still a single atomic RMW from the observer's view.

use std::sync::atomic::{self, AtomicU32, Ordering};

use crate::common::{Trap, WORD_BYTES};
use crate::core::units::lsu::unaligned::{
    is_aligned, load_misaligned_trap, store_misaligned_trap,
};
use crate::isa::rv32a::AmoOp;
use crate::soc::traits::AtomicTarget;

/// Number of words in the host window; the cell is the first one.
const WINDOW_WORDS: usize = 4;

/// AMO target backed by host atomics.
#[derive(Debug)]
pub struct HostTarget {
    words: Box<[AtomicU32]>,
    ordering: Ordering,
    fences: u64,
}

impl Default for HostTarget {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl HostTarget {
    /// Creates a host target whose AMOs carry the given aq/rl semantics.
    pub fn new(aq: bool, rl: bool) -> Self {
        let ordering = match (aq, rl) {
            (true, true) => Ordering::SeqCst,
            (true, false) => Ordering::Acquire,
            (false, true) => Ordering::Release,
            (false, false) => Ordering::Relaxed,
        };
        Self {
            words: (0..WINDOW_WORDS).map(|_| AtomicU32::new(0)).collect(),
            ordering,
            fences: 0,
        }
    }

    /// Number of fences issued so far.
    pub const fn fences(&self) -> u64 {
        self.fences
    }

    /// Ordering applied to every AMO.
    pub const fn ordering(&self) -> Ordering {
        self.ordering
    }

    fn base(&self) -> u64 {
        self.words.as_ptr() as u64
    }

    fn word(
        &self,
        addr: u64,
        misaligned: fn(u64) -> Trap,
        fault: fn(u64) -> Trap,
    ) -> Result<&AtomicU32, Trap> {
        if !is_aligned(addr, WORD_BYTES) {
            return Err(misaligned(addr));
        }
        let index = addr
            .checked_sub(self.base())
            .map(|off| off / WORD_BYTES)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| fault(addr))?;
        self.words.get(index).ok_or_else(|| fault(addr))
    }
}

impl AtomicTarget for HostTarget {
    fn name(&self) -> &str {
        "host"
    }

    fn has_atomics(&self) -> bool {
        cfg!(target_has_atomic = "32")
    }

    fn cell_addr(&self) -> u64 {
        self.base()
    }

    fn store_word(&mut self, addr: u64, val: u32) -> Result<(), Trap> {
        self.word(addr, store_misaligned_trap, Trap::StoreAccessFault)?
            .store(val, Ordering::Relaxed);
        Ok(())
    }

    fn load_word(&mut self, addr: u64) -> Result<u32, Trap> {
        Ok(self
            .word(addr, load_misaligned_trap, Trap::LoadAccessFault)?
            .load(Ordering::Relaxed))
    }

    fn fence(&mut self) {
        atomic::fence(Ordering::SeqCst);
        self.fences += 1;
    }

    fn amo_w(&mut self, op: AmoOp, addr: u64, operand: u32) -> Result<u32, Trap> {
        let order = self.ordering;
        let word = self.word(addr, store_misaligned_trap, Trap::StoreAccessFault)?;
        let signed = |f: fn(i32, i32) -> i32| {
            match word.fetch_update(order, Ordering::Relaxed, |v| {
                Some(f(v as i32, operand as i32) as u32)
            }) {
                Ok(prev) | Err(prev) => prev,
            }
        };
        let pre = match op {
            AmoOp::Swap => word.swap(operand, order),
            AmoOp::Add => word.fetch_add(operand, order),
            AmoOp::And => word.fetch_and(operand, order),
            AmoOp::Or => word.fetch_or(operand, order),
            AmoOp::Xor => word.fetch_xor(operand, order),
            AmoOp::Max => signed(i32::max),
            AmoOp::Maxu => word.fetch_max(operand, order),
            AmoOp::Min => signed(i32::min),
            AmoOp::Minu => word.fetch_min(operand, order),
        };
        Ok(pre)
    }
}
