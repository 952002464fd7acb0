//! RISC-V architecture-specific components.
//!
//! 1. **CSRs:** `misa` layout and extension bits used by the capability probe.
//! 2. **GPRs:** General-Purpose Register file implementation.

/// Control and Status Register (CSR) definitions.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;
