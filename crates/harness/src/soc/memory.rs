//! Physical memory of the simulated hart.
//!
//! A little-endian byte array mapped at a base address. Accesses outside the
//! mapped range return `None`; the hart turns that into an access fault.

/// System memory mapped at `base_addr`.
#[derive(Clone, Debug)]
pub struct Memory {
    data: Vec<u8>,
    base_addr: u64,
}

impl Memory {
    /// Creates `size` bytes of zeroed memory at `base_addr`.
    pub fn new(size: usize, base_addr: u64) -> Self {
        Self {
            data: vec![0; size],
            base_addr,
        }
    }

    /// Returns the address range (Base, Size).
    pub fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.data.len() as u64)
    }

    /// Returns true if `len` bytes starting at `addr` are mapped.
    pub fn contains(&self, addr: u64, len: u64) -> bool {
        self.offset(addr, len).is_some()
    }

    fn offset(&self, addr: u64, len: u64) -> Option<usize> {
        let off = addr.checked_sub(self.base_addr)?;
        let end = off.checked_add(len)?;
        if end > self.data.len() as u64 {
            return None;
        }
        usize::try_from(off).ok()
    }

    /// Reads a word (32-bit, little-endian).
    pub fn read_u32(&self, addr: u64) -> Option<u32> {
        let i = self.offset(addr, 4)?;
        let bytes: [u8; 4] = self.data.get(i..i + 4)?.try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }

    /// Writes a word (32-bit, little-endian). Returns false if unmapped.
    pub fn write_u32(&mut self, addr: u64, val: u32) -> bool {
        let Some(i) = self.offset(addr, 4) else {
            return false;
        };
        self.data[i..i + 4].copy_from_slice(&val.to_le_bytes());
        true
    }
}
