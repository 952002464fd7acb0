//! Instruction Disassembler for the encodings the harness issues.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace output, the `kinds` listing, and test diagnostics.
//!
//! # Supported Encodings
//!
//! - RV32A/RV64A (LR, SC, and all AMOs, word and double)
//! - FENCE / FENCE.I
//!
//! # Usage
//!
//! ```
//! use amocheck_core::isa::disasm::disassemble;
//! let text = disassemble(0x08b5262f);
//! assert_eq!(text, "amoswap.w a2, a1, (a0)");
//! ```

use crate::core::units::lsu::ordering::Fence;
use crate::isa::abi::xreg;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32a::{funct3 as a_f3, funct5 as a_f5, opcodes as a_op};
use crate::isa::rv32i::opcodes as i_op;

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns `"unknown (0x????????)"` for encodings outside the supported set.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    match inst.opcode() {
        a_op::OP_AMO => disasm_amo(inst),
        i_op::OP_MISC_MEM => match inst.funct3() {
            i_op::FUNCT3_FENCE_I => "fence.i".to_string(),
            i_op::FUNCT3_FENCE => Fence::decode(inst).to_string(),
            _ => unknown(inst),
        },
        _ => unknown(inst),
    }
}

fn unknown(inst: u32) -> String {
    format!("unknown ({inst:#010x})")
}

/// Disassemble AMO instruction.
fn disasm_amo(inst: u32) -> String {
    let suffix = match inst.funct3() {
        a_f3::WIDTH_32 => ".w",
        a_f3::WIDTH_64 => ".d",
        _ => return unknown(inst),
    };
    let ordering = match (inst.aq(), inst.rl()) {
        (true, true) => ".aqrl",
        (true, false) => ".aq",
        (false, true) => ".rl",
        (false, false) => "",
    };
    let (rd, rs1, rs2) = (inst.rd(), inst.rs1(), inst.rs2());
    let mn = match inst.funct5() {
        a_f5::LR => return format!("lr{suffix}{ordering} {}, ({})", xreg(rd), xreg(rs1)),
        a_f5::SC => "sc",
        a_f5::AMOSWAP => "amoswap",
        a_f5::AMOADD => "amoadd",
        a_f5::AMOXOR => "amoxor",
        a_f5::AMOAND => "amoand",
        a_f5::AMOOR => "amoor",
        a_f5::AMOMIN => "amomin",
        a_f5::AMOMAX => "amomax",
        a_f5::AMOMINU => "amominu",
        a_f5::AMOMAXU => "amomaxu",
        _ => "amo??",
    };
    format!(
        "{mn}{suffix}{ordering} {}, {}, ({})",
        xreg(rd),
        xreg(rs2),
        xreg(rs1)
    )
}
