//! Simulated RV32 hart.
//!
//! This module implements the hart the harness tests by default. It provides:
//! 1. **State:** General-purpose registers, the `misa` CSR, RAM and a store buffer.
//! 2. **Execution:** FENCE and the nine word AMOs, issued as real encodings
//!    (see `execution`).
//! 3. **Memory:** Plain word loads and stores through the store buffer
//!    (see `memory`).
//! 4. **Target contract:** [`AtomicTarget`] on top of the above.

/// Instruction execution (AMO, FENCE).
pub mod execution;

/// Plain loads, stores and store buffer draining.
pub mod memory;

use tracing::warn;

use crate::common::{HarnessError, Trap, WORD_BYTES};
use crate::config::TargetConfig;
use crate::core::arch::csr::{self, has_atomic_ext};
use crate::core::arch::gpr::Gpr;
use crate::core::units::lsu::ordering::Fence;
use crate::core::units::lsu::store_buffer::StoreBuffer;
use crate::isa::abi::{REG_A0, REG_A1, REG_A2};
use crate::isa::rv32a::AmoOp;
use crate::soc::memory::Memory;
use crate::soc::traits::AtomicTarget;

/// Counters of the memory instructions a hart has executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HartStats {
    /// Plain word loads.
    pub loads: u64,
    /// Plain word stores.
    pub stores: u64,
    /// AMOs that completed.
    pub amos: u64,
    /// FENCE instructions executed.
    pub fences: u64,
    /// Stores written from the store buffer to memory.
    pub drained_stores: u64,
    /// Traps raised by any instruction.
    pub traps: u64,
}

/// RV32 hart with a weakly ordered store path.
///
/// Plain stores wait in the store buffer while AMOs read and write memory
/// directly, even when the buffer holds a store to the same word. A hart that
/// honours same-address program order would hide a missing leading fence, so
/// that ordering is opt-in through [`TargetConfig::same_address_ordering`].
#[derive(Clone, Debug)]
pub struct Hart {
    /// General-purpose registers.
    pub regs: Gpr,
    misa: u32,
    memory: Memory,
    store_buffer: StoreBuffer,
    cell_addr: u64,
    aq: bool,
    rl: bool,
    same_address_ordering: bool,
    /// Instruction counters.
    pub stats: HartStats,
}

impl Hart {
    /// Builds a hart from the target section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidMisa`] for a malformed `misa` override,
    /// [`HarnessError::CellOutOfRange`] if the shared cell is not inside RAM
    /// and [`HarnessError::CellNotAddressable`] if it lies above 4 GiB.
    pub fn from_config(config: &TargetConfig) -> Result<Self, HarnessError> {
        let misa = config.misa()?;
        let out_of_range = HarnessError::CellOutOfRange {
            offset: config.cell_offset,
            size: config.ram_size,
        };
        let Some(cell_addr) = config.cell_addr() else {
            return Err(out_of_range);
        };
        let memory = Memory::new(config.ram_size, config.ram_base);
        if !memory.contains(cell_addr, WORD_BYTES) {
            return Err(out_of_range);
        }
        if cell_addr > u64::from(u32::MAX) - (WORD_BYTES - 1) {
            return Err(HarnessError::CellNotAddressable { addr: cell_addr });
        }
        Ok(Self {
            regs: Gpr::new(),
            misa,
            memory,
            store_buffer: StoreBuffer::new(config.store_buffer_depth),
            cell_addr,
            aq: config.aq,
            rl: config.rl,
            same_address_ordering: config.same_address_ordering,
            stats: HartStats::default(),
        })
    }

    /// Reads a CSR. Only `misa` is implemented.
    pub const fn read_csr(&self, addr: u32) -> Option<u32> {
        match addr {
            csr::MISA => Some(self.misa),
            _ => None,
        }
    }

    /// Number of stores not yet visible in memory.
    pub fn pending_stores(&self) -> usize {
        self.store_buffer.len()
    }

    /// Reads a word directly from memory, bypassing the store buffer.
    ///
    /// This is what another bus agent would observe.
    pub fn peek_memory(&self, addr: u64) -> Option<u32> {
        self.memory.read_u32(addr)
    }
}

impl AtomicTarget for Hart {
    fn name(&self) -> &str {
        "sim-hart"
    }

    fn has_atomics(&self) -> bool {
        self.read_csr(csr::MISA).is_some_and(has_atomic_ext)
    }

    fn cell_addr(&self) -> u64 {
        self.cell_addr
    }

    fn store_word(&mut self, addr: u64, val: u32) -> Result<(), Trap> {
        self.store(addr, val)
    }

    fn load_word(&mut self, addr: u64) -> Result<u32, Trap> {
        self.load(addr)
    }

    fn fence(&mut self) {
        if let Err(trap) = self.execute(Fence::FULL.encode()) {
            warn!(%trap, "full fence trapped");
        }
    }

    fn amo_w(&mut self, op: AmoOp, addr: u64, operand: u32) -> Result<u32, Trap> {
        let Ok(addr32) = u32::try_from(addr) else {
            self.stats.traps += 1;
            return Err(Trap::StoreAccessFault(addr));
        };
        self.regs.write(REG_A0, addr32);
        self.regs.write(REG_A1, operand);
        self.execute(op.encode(REG_A2, REG_A0, REG_A1, self.aq, self.rl))?;
        Ok(self.regs.read(REG_A2))
    }
}
