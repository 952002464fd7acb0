//! Shared cell handle.
//!
//! A `SharedCell` is the only way the verifier touches target memory during
//! a test case. It holds the target by exclusive borrow, so while one case is
//! in flight nothing else can reach the word; the borrow ends when the case's
//! cell is dropped.

use std::fmt;

use crate::common::Trap;
use crate::isa::rv32a::AmoOp;
use crate::soc::traits::AtomicTarget;

/// Exclusively borrowed handle on one aligned word of a target.
pub struct SharedCell<'t, T: AtomicTarget + ?Sized> {
    target: &'t mut T,
    addr: u64,
}

impl<'t, T: AtomicTarget + ?Sized> SharedCell<'t, T> {
    /// Borrows the target's own shared word.
    pub fn new(target: &'t mut T) -> Self {
        let addr = target.cell_addr();
        Self { target, addr }
    }

    /// Borrows an explicit address of the target.
    pub const fn at(target: &'t mut T, addr: u64) -> Self {
        Self { target, addr }
    }

    /// Address of the word.
    pub const fn addr(&self) -> u64 {
        self.addr
    }

    /// Plain store into the cell.
    ///
    /// # Errors
    ///
    /// Propagates the target's store trap.
    pub fn store(&mut self, val: u32) -> Result<(), Trap> {
        self.target.store_word(self.addr, val)
    }

    /// Plain load from the cell.
    ///
    /// # Errors
    ///
    /// Propagates the target's load trap.
    pub fn load(&mut self) -> Result<u32, Trap> {
        self.target.load_word(self.addr)
    }

    /// Issues a full barrier on the owning target.
    pub fn fence(&mut self) {
        self.target.fence();
    }

    /// Issues `op` on the cell and returns the reported pre-operation word.
    ///
    /// # Errors
    ///
    /// Propagates the target's AMO trap.
    pub fn amo(&mut self, op: AmoOp, operand: u32) -> Result<u32, Trap> {
        self.target.amo_w(op, self.addr, operand)
    }
}

impl<T: AtomicTarget + ?Sized> fmt::Debug for SharedCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCell")
            .field("target", &self.target.name())
            .field("addr", &format_args!("{:#x}", self.addr))
            .finish()
    }
}
