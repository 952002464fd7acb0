//! Alignment checking for word accesses.
//!
//! AMOs must be naturally aligned; the architecture gives no option to split
//! them, so a misaligned AMO always raises the store/AMO misaligned trap.

use crate::common::error::Trap;

/// Checks whether a memory access at `addr` with `size` bytes is naturally aligned.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The access width in bytes (1, 2, 4, or 8).
pub const fn is_aligned(addr: u64, size: u64) -> bool {
    if size <= 1 {
        return true;
    }
    (addr & (size - 1)) == 0
}

/// Returns the misaligned trap for a load at `addr`.
pub const fn load_misaligned_trap(addr: u64) -> Trap {
    Trap::LoadAddressMisaligned(addr)
}

/// Returns the misaligned trap for a store or AMO at `addr`.
pub const fn store_misaligned_trap(addr: u64) -> Trap {
    Trap::StoreAddressMisaligned(addr)
}
