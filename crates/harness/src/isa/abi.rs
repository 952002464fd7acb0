//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! The simulated hart issues AMOs through fixed argument registers, the same
//! way an inline-assembly wrapper binds `addr` and `operand` to `a0`/`a1`.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x10 (a0): AMO address operand (`rs1`).
pub const REG_A0: usize = 10;
/// Register x11 (a1): AMO source operand (`rs2`).
pub const REG_A1: usize = 11;
/// Register x12 (a2): AMO destination (`rd`), receives the pre-operation value.
pub const REG_A2: usize = 12;

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
pub fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}
