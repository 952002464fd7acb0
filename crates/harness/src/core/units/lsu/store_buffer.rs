//! Store Buffer for deferred memory writes.
//!
//! Plain stores issued by the hart are held here instead of being written to
//! memory immediately. The buffer provides:
//! 1. **Allocation:** Append a resolved word store; the oldest entry drains
//!    to memory when the buffer is full.
//! 2. **Forwarding:** A load from the issuing hart sees its own newest store.
//! 3. **Drain:** A fence (or an AMO with the release bit) writes every
//!    pending store to memory in program order.
//!
//! AMOs operate on memory directly, so an AMO that is not preceded by a fence
//! observes the stale memory word. This makes a missing barrier visible to the
//! verifier as a pre-value mismatch.

use std::collections::VecDeque;

/// A single pending word store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreBufferEntry {
    /// Physical address of the store.
    pub addr: u64,
    /// Data to store.
    pub data: u32,
}

/// Store buffer: FIFO queue of pending word stores.
#[derive(Clone, Debug)]
pub struct StoreBuffer {
    entries: VecDeque<StoreBufferEntry>,
    capacity: usize,
}

impl StoreBuffer {
    /// Creates a new store buffer with the given capacity.
    ///
    /// A capacity of zero makes every store write through immediately.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of pending stores.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no store is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queues a store.
    ///
    /// Returns the entry that had to be evicted to make room, which the
    /// caller must write to memory, or the new entry itself when the buffer
    /// has zero capacity.
    pub fn push(&mut self, addr: u64, data: u32) -> Option<StoreBufferEntry> {
        let entry = StoreBufferEntry { addr, data };
        if self.capacity == 0 {
            return Some(entry);
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Returns the newest pending data for `addr`, if any.
    pub fn forward(&self, addr: u64) -> Option<u32> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.addr == addr)
            .map(|e| e.data)
    }

    /// Removes and returns all pending stores, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = StoreBufferEntry> + '_ {
        self.entries.drain(..)
    }
}
