//! Plain loads and stores of the simulated hart.
//!
//! Stores are queued in the store buffer; loads forward from it before
//! falling back to memory. Only a fence or a release AMO makes queued stores
//! visible to memory (and therefore to AMOs).

use super::Hart;
use crate::common::{Trap, WORD_BYTES};
use crate::core::units::lsu::unaligned::{
    is_aligned, load_misaligned_trap, store_misaligned_trap,
};

impl Hart {
    /// Plain word store.
    ///
    /// # Errors
    ///
    /// Returns a misaligned or access-fault trap.
    pub fn store(&mut self, addr: u64, val: u32) -> Result<(), Trap> {
        if !is_aligned(addr, WORD_BYTES) {
            self.stats.traps += 1;
            return Err(store_misaligned_trap(addr));
        }
        if !self.memory.contains(addr, WORD_BYTES) {
            self.stats.traps += 1;
            return Err(Trap::StoreAccessFault(addr));
        }
        if let Some(evicted) = self.store_buffer.push(addr, val) {
            self.commit(evicted.addr, evicted.data);
        }
        self.stats.stores += 1;
        Ok(())
    }

    /// Plain word load, forwarding from the store buffer.
    ///
    /// # Errors
    ///
    /// Returns a misaligned or access-fault trap.
    pub fn load(&mut self, addr: u64) -> Result<u32, Trap> {
        if !is_aligned(addr, WORD_BYTES) {
            self.stats.traps += 1;
            return Err(load_misaligned_trap(addr));
        }
        let val = match self.store_buffer.forward(addr) {
            Some(val) => val,
            None => match self.memory.read_u32(addr) {
                Some(val) => val,
                None => {
                    self.stats.traps += 1;
                    return Err(Trap::LoadAccessFault(addr));
                }
            },
        };
        self.stats.loads += 1;
        Ok(val)
    }

    /// Writes every pending store to memory, oldest first.
    pub(super) fn drain_store_buffer(&mut self) {
        let pending: Vec<_> = self.store_buffer.drain().collect();
        for entry in pending {
            self.commit(entry.addr, entry.data);
        }
    }

    fn commit(&mut self, addr: u64, data: u32) {
        let written = self.memory.write_u32(addr, data);
        debug_assert!(written, "store buffer held unmapped address {addr:#x}");
        self.stats.drained_stores += 1;
    }
}
