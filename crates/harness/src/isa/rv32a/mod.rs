//! RISC-V Atomic Extension (A).
//!
//! Defines constants and logic for Atomic Memory Operations (AMO).
//! AMOs perform a read-modify-write operation in a single instruction and
//! return the pre-operation memory value in `rd`.

use std::fmt;

use crate::isa::instruction::InstructionBits;

/// Function code 3 definitions (operation width).
pub mod funct3;

/// Function code 5 definitions for atomic operation variants.
pub mod funct5;

/// Atomic extension opcodes.
pub mod opcodes;

/// The nine 32-bit read-modify-write operations under test.
///
/// [`AmoOp::ALL`] lists them in the order the harness runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmoOp {
    /// `amoswap.w`: memory := operand.
    Swap,
    /// `amoadd.w`: memory := memory + operand (wrapping).
    Add,
    /// `amoand.w`: memory := memory & operand.
    And,
    /// `amoor.w`: memory := memory | operand.
    Or,
    /// `amoxor.w`: memory := memory ^ operand.
    Xor,
    /// `amomax.w`: signed maximum.
    Max,
    /// `amomaxu.w`: unsigned maximum.
    Maxu,
    /// `amomin.w`: signed minimum.
    Min,
    /// `amominu.w`: unsigned minimum.
    Minu,
}

impl AmoOp {
    /// All operations in run order.
    pub const ALL: [Self; 9] = [
        Self::Swap,
        Self::Add,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Max,
        Self::Maxu,
        Self::Min,
        Self::Minu,
    ];

    /// Returns the `funct5` encoding of this operation.
    pub const fn funct5(self) -> u32 {
        match self {
            Self::Swap => funct5::AMOSWAP,
            Self::Add => funct5::AMOADD,
            Self::And => funct5::AMOAND,
            Self::Or => funct5::AMOOR,
            Self::Xor => funct5::AMOXOR,
            Self::Max => funct5::AMOMAX,
            Self::Maxu => funct5::AMOMAXU,
            Self::Min => funct5::AMOMIN,
            Self::Minu => funct5::AMOMINU,
        }
    }

    /// Maps a `funct5` value back to an operation; `LR`, `SC` and reserved
    /// encodings return `None`.
    pub const fn from_funct5(f5: u32) -> Option<Self> {
        match f5 {
            funct5::AMOSWAP => Some(Self::Swap),
            funct5::AMOADD => Some(Self::Add),
            funct5::AMOAND => Some(Self::And),
            funct5::AMOOR => Some(Self::Or),
            funct5::AMOXOR => Some(Self::Xor),
            funct5::AMOMAX => Some(Self::Max),
            funct5::AMOMAXU => Some(Self::Maxu),
            funct5::AMOMIN => Some(Self::Min),
            funct5::AMOMINU => Some(Self::Minu),
            _ => None,
        }
    }

    /// Assembler mnemonic of the word variant, e.g. `"amoswap.w"`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Swap => "amoswap.w",
            Self::Add => "amoadd.w",
            Self::And => "amoand.w",
            Self::Or => "amoor.w",
            Self::Xor => "amoxor.w",
            Self::Max => "amomax.w",
            Self::Maxu => "amomaxu.w",
            Self::Min => "amomin.w",
            Self::Minu => "amominu.w",
        }
    }

    /// Returns true for the operations that compare as signed 32-bit integers.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Max | Self::Min)
    }

    /// Encodes `amo<op>.w rd, rs2, (rs1)` with the given ordering bits.
    ///
    /// # Arguments
    ///
    /// * `rd`  - Destination register; receives the pre-operation value.
    /// * `rs1` - Register holding the address.
    /// * `rs2` - Register holding the operand.
    /// * `aq`  - Acquire bit.
    /// * `rl`  - Release bit.
    pub const fn encode(self, rd: usize, rs1: usize, rs2: usize, aq: bool, rl: bool) -> u32 {
        let funct7 = (self.funct5() << 2) | ((aq as u32) << 1) | (rl as u32);
        (funct7 << 25)
            | ((rs2 as u32 & 0x1F) << 20)
            | ((rs1 as u32 & 0x1F) << 15)
            | (funct3::WIDTH_32 << 12)
            | ((rd as u32 & 0x1F) << 7)
            | opcodes::OP_AMO
    }

    /// Decodes a 32-bit AMO encoding, returning `None` for anything that is
    /// not one of the nine word AMOs.
    pub fn decode(inst: u32) -> Option<Self> {
        if inst.opcode() != opcodes::OP_AMO || inst.funct3() != funct3::WIDTH_32 {
            return None;
        }
        Self::from_funct5(inst.funct5())
    }
}

impl fmt::Display for AmoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
