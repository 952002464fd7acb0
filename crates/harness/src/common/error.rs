//! Trap and harness error definitions.
//!
//! This module defines the two error layers of the harness:
//! 1. **Traps:** Architectural exceptions a target raises while executing a
//!    load, store or AMO (e.g. a misaligned shared cell).
//! 2. **Harness Errors:** Configuration and reporting failures surfaced to the
//!    driver. A mismatching test case is *not* an error; it is counted data.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// RISC-V synchronous exceptions a target can raise during a test case.
///
/// Only the traps reachable from word loads, stores and AMOs are modelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised when an AMO is issued on a hart without the A extension, or
    /// when the encoding is not a 32-bit AMO. The associated value is the
    /// instruction encoding.
    IllegalInstruction(u32),

    /// Load address misaligned exception. The associated value is the address.
    LoadAddressMisaligned(u64),

    /// Load access fault exception. The associated value is the address.
    LoadAccessFault(u64),

    /// Store/AMO address misaligned exception. The associated value is the address.
    StoreAddressMisaligned(u64),

    /// Store/AMO access fault exception. The associated value is the address.
    StoreAccessFault(u64),
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalInstruction(inst) => write!(f, "IllegalInstruction({inst:#010x})"),
            Self::LoadAddressMisaligned(addr) => write!(f, "LoadAddressMisaligned({addr:#x})"),
            Self::LoadAccessFault(addr) => write!(f, "LoadAccessFault({addr:#x})"),
            Self::StoreAddressMisaligned(addr) => write!(f, "StoreAddressMisaligned({addr:#x})"),
            Self::StoreAccessFault(addr) => write!(f, "StoreAccessFault({addr:#x})"),
        }
    }
}

impl std::error::Error for Trap {}

/// Errors surfaced by the harness to its driver.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The target does not implement the A extension; no case was run.
    #[error("A ISA extension not implemented on target `{target}`")]
    ConfigurationUnavailable {
        /// Name of the probed target.
        target: String,
    },

    /// The report sink rejected output. Counters are unaffected.
    #[error("report sink rejected output: {0}")]
    SinkFailure(#[source] io::Error),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The `misa` override is not a hexadecimal register value.
    #[error("invalid misa override `{0}` (expected hex, e.g. 0x40101105)")]
    InvalidMisa(String),

    /// The target layout cannot hold the shared cell.
    #[error("shared cell at offset {offset:#x} does not fit in {size} bytes of RAM")]
    CellOutOfRange {
        /// Configured byte offset of the cell.
        offset: u64,
        /// Configured RAM size in bytes.
        size: usize,
    },

    /// The shared cell lies outside the 32-bit physical address space of an
    /// RV32 hart.
    #[error("shared cell at {addr:#x} is not addressable by an RV32 hart")]
    CellNotAddressable {
        /// Absolute address of the cell.
        addr: u64,
    },

    /// A configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
