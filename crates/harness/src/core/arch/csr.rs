//! Control and Status Register (CSR) definitions.
//!
//! Only `misa` is modelled: the harness reads it once to decide whether the
//! A extension is present before any AMO is issued.

/// Machine ISA register address.
pub const MISA: u32 = 0x301;

/// MISA extension bit for atomic operations (A extension).
pub const MISA_EXT_A: u32 = 1 << 0;

/// MISA extension bit for compressed instructions (C extension).
pub const MISA_EXT_C: u32 = 1 << 2;

/// MISA extension bit for base integer instructions (I extension).
pub const MISA_EXT_I: u32 = 1 << 8;

/// MISA extension bit for integer multiply/divide (M extension).
pub const MISA_EXT_M: u32 = 1 << 12;

/// MISA extension bit for user mode (U extension).
pub const MISA_EXT_U: u32 = 1 << 20;

/// MXL field value for a 32-bit hart (bits 31:30 = 1).
pub const MISA_XLEN_32: u32 = 1 << 30;

/// Default `misa` of the simulated hart: RV32IMACU.
pub const MISA_DEFAULT_RV32IMACU: u32 =
    MISA_XLEN_32 | MISA_EXT_I | MISA_EXT_M | MISA_EXT_A | MISA_EXT_C | MISA_EXT_U;

/// Returns true if `misa` advertises the A extension.
#[inline]
pub const fn has_atomic_ext(misa: u32) -> bool {
    misa & MISA_EXT_A != 0
}
