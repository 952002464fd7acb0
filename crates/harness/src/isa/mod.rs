//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings the harness issues to a hart, organized by RISC-V
//! extension, plus field extraction and disassembly for diagnostics.
//!
//! # Extensions
//!
//! * `rv32i`: The base-ISA opcodes the harness needs (FENCE).
//! * `rv32a`: Standard Extension for Atomic Instructions (word AMOs).

/// ABI register name mappings.
pub mod abi;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Atomic memory operations extension (AMO instructions).
pub mod rv32a;

/// Base integer opcodes used by the harness.
pub mod rv32i;
