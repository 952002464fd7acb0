//! Memory ordering and fence operations.
//!
//! This module implements RISC-V memory ordering semantics for FENCE
//! instructions: the predecessor/successor ordering sets (I/O/R/W), and the
//! full `fence iorw, iorw` barrier the harness issues around every AMO.

use std::fmt;

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes::{FUNCT3_FENCE, OP_MISC_MEM};

/// Predecessor/Successor ordering bits for FENCE instructions.
///
/// RISC-V FENCE encoding: the immediate field holds two 4-bit fields,
/// predecessor (bits 27:24) and successor (bits 23:20), each with flags for
/// I (device input), O (device output), R (read), W (write).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FenceSet {
    /// Device input ordering.
    pub i: bool,
    /// Device output ordering.
    pub o: bool,
    /// Memory read ordering.
    pub r: bool,
    /// Memory write ordering.
    pub w: bool,
}

impl FenceSet {
    /// All four ordering bits set.
    pub const ALL: Self = Self {
        i: true,
        o: true,
        r: true,
        w: true,
    };

    /// Decodes a 4-bit FENCE ordering set from an instruction field.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            i: bits & 0b1000 != 0,
            o: bits & 0b0100 != 0,
            r: bits & 0b0010 != 0,
            w: bits & 0b0001 != 0,
        }
    }

    /// Encodes back to a 4-bit field.
    pub const fn to_bits(self) -> u8 {
        ((self.i as u8) << 3) | ((self.o as u8) << 2) | ((self.r as u8) << 1) | (self.w as u8)
    }

    /// Returns true if no ordering bits are set (the fence is a no-op).
    pub const fn is_empty(self) -> bool {
        !self.i && !self.o && !self.r && !self.w
    }

    /// Returns true if all ordering bits are set (full barrier).
    pub const fn is_full(self) -> bool {
        self.i && self.o && self.r && self.w
    }
}

impl fmt::Display for FenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, name) in [(self.i, 'i'), (self.o, 'o'), (self.r, 'r'), (self.w, 'w')] {
            if set {
                write!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

/// Decoded FENCE instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fence {
    /// Predecessor ordering set: operations before the fence.
    pub pred: FenceSet,
    /// Successor ordering set: operations after the fence.
    pub succ: FenceSet,
}

impl Fence {
    /// `fence iorw, iorw`: no memory access may cross it in either direction.
    pub const FULL: Self = Self {
        pred: FenceSet::ALL,
        succ: FenceSet::ALL,
    };

    /// Decodes a FENCE instruction from the raw 32-bit encoding.
    pub const fn decode(inst: u32) -> Self {
        let pred_bits = ((inst >> 24) & 0xF) as u8;
        let succ_bits = ((inst >> 20) & 0xF) as u8;
        Self {
            pred: FenceSet::from_bits(pred_bits),
            succ: FenceSet::from_bits(succ_bits),
        }
    }

    /// Encodes this fence as `fence pred, succ` (fm = 0, rd = rs1 = x0).
    pub const fn encode(self) -> u32 {
        ((self.pred.to_bits() as u32) << 24)
            | ((self.succ.to_bits() as u32) << 20)
            | (FUNCT3_FENCE << 12)
            | OP_MISC_MEM
    }

    /// Returns true if `inst` is a plain FENCE (not FENCE.I).
    pub fn is_fence(inst: u32) -> bool {
        inst.opcode() == OP_MISC_MEM && inst.funct3() == FUNCT3_FENCE
    }

    /// Returns true if both predecessor and successor sets have no bits set.
    pub const fn is_nop(&self) -> bool {
        self.pred.is_empty() && self.succ.is_empty()
    }

    /// Returns true if this is a full IORW,IORW barrier.
    pub const fn is_full_barrier(&self) -> bool {
        self.pred.is_full() && self.succ.is_full()
    }

    /// Returns true if prior stores must become visible before later accesses.
    pub const fn orders_prior_writes(&self) -> bool {
        self.pred.w && (self.succ.r || self.succ.w)
    }
}

impl fmt::Display for Fence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full_barrier() {
            return f.write_str("fence");
        }
        write!(f, "fence {}, {}", self.pred, self.succ)
    }
}
