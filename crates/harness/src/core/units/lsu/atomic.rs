//! Atomic memory operation ALU.
//!
//! Implements the read-modify-write arithmetic the simulated hart performs for
//! RISC-V A-extension word AMOs. Given the current memory word and the `rs2`
//! register value, computes the word written back to memory.
//!
//! This is the *device under test* side; the verifier checks it against the
//! independent model in [`crate::sim::reference`].

use crate::isa::rv32a::AmoOp;

/// Performs an atomic ALU operation for a word AMO.
///
/// # Arguments
///
/// * `op`      - The atomic operation type
/// * `mem_val` - The current value read from memory
/// * `reg_val` - The value from the source register
///
/// # Returns
///
/// The computed result that will be written back to memory.
pub fn atomic_alu(op: AmoOp, mem_val: u32, reg_val: u32) -> u32 {
    let a = mem_val as i32;
    let b = reg_val as i32;
    let res = match op {
        AmoOp::Swap => b,
        AmoOp::Add => a.wrapping_add(b),
        AmoOp::Xor => a ^ b,
        AmoOp::And => a & b,
        AmoOp::Or => a | b,
        AmoOp::Min => a.min(b),
        AmoOp::Max => a.max(b),
        AmoOp::Minu => mem_val.min(reg_val) as i32,
        AmoOp::Maxu => mem_val.max(reg_val) as i32,
    };
    res as u32
}
