//! RV32I Opcodes.

/// Memory ordering opcode (0b0001111), used by FENCE and FENCE.I.
pub const OP_MISC_MEM: u32 = 0b0001111;

/// funct3 of a plain FENCE.
pub const FUNCT3_FENCE: u32 = 0b000;

/// funct3 of FENCE.I.
pub const FUNCT3_FENCE_I: u32 = 0b001;
