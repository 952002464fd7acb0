//! RISC-V Base Integer Instruction Set (RV32I), the subset the harness issues.

/// Base integer opcodes.
pub mod opcodes;
