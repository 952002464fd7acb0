//! Instruction execution for the simulated hart.
//!
//! Only the instructions the harness issues are implemented:
//! 1. **FENCE:** Drains the store buffer when prior writes must be ordered.
//! 2. **AMO.W:** Read-modify-write on memory through the atomic ALU, with the
//!    release bit (or, if configured, a pending store to the same word)
//!    draining the store buffer first.
//!
//! Anything else, and any AMO on a hart whose `misa` lacks the A bit, raises
//! an illegal-instruction trap.

use tracing::trace;

use super::Hart;
use crate::common::{Trap, WORD_BYTES};
use crate::core::arch::csr::has_atomic_ext;
use crate::core::units::lsu::atomic::atomic_alu;
use crate::core::units::lsu::ordering::Fence;
use crate::core::units::lsu::unaligned::{is_aligned, store_misaligned_trap};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32a::{AmoOp, opcodes as a_op};

impl Hart {
    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the trap the instruction raised; the trap counter is bumped.
    pub fn execute(&mut self, inst: u32) -> Result<(), Trap> {
        trace!(inst = %disassemble(inst), "execute");
        let result = if Fence::is_fence(inst) {
            self.exec_fence(Fence::decode(inst));
            Ok(())
        } else if inst.opcode() == a_op::OP_AMO && has_atomic_ext(self.misa) {
            match AmoOp::decode(inst) {
                Some(op) => self.exec_amo(op, inst),
                None => Err(Trap::IllegalInstruction(inst)),
            }
        } else {
            Err(Trap::IllegalInstruction(inst))
        };
        if result.is_err() {
            self.stats.traps += 1;
        }
        result
    }

    fn exec_fence(&mut self, fence: Fence) {
        if fence.orders_prior_writes() {
            self.drain_store_buffer();
        }
        self.stats.fences += 1;
    }

    fn exec_amo(&mut self, op: AmoOp, inst: u32) -> Result<(), Trap> {
        let addr = u64::from(self.regs.read(inst.rs1()));
        if !is_aligned(addr, WORD_BYTES) {
            return Err(store_misaligned_trap(addr));
        }
        let same_address_pending =
            self.same_address_ordering && self.store_buffer.forward(addr).is_some();
        if inst.rl() || same_address_pending {
            self.drain_store_buffer();
        }
        let mem_val = self
            .memory
            .read_u32(addr)
            .ok_or(Trap::StoreAccessFault(addr))?;
        let new_val = atomic_alu(op, mem_val, self.regs.read(inst.rs2()));
        if !self.memory.write_u32(addr, new_val) {
            return Err(Trap::StoreAccessFault(addr));
        }
        self.regs.write(inst.rd(), mem_val);
        self.stats.amos += 1;
        Ok(())
    }
}
