//! Allocation addresses.
//!
//! An [`Address`] is the byte position of an allocation inside the pool
//! buffer, stamped with the pool generation it was issued in. The
//! generation makes addresses from a previous `initialize` cycle
//! harmless: they never match a region of the current pool.

use std::fmt;

use wordpool_core::WordOffset;

/// Opaque handle to an allocation.
///
/// Returned by [`MemoryManager::allocate`](crate::MemoryManager::allocate)
/// and consumed by [`MemoryManager::free`](crate::MemoryManager::free).
/// An address is valid until it is freed or the pool is shut down or
/// re-initialized; afterwards it simply fails to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    /// Pool generation when this address was issued.
    pub(crate) generation: u32,
    /// Byte offset from the start of the pool buffer.
    pub(crate) byte_offset: usize,
}

impl Address {
    pub(crate) fn new(generation: u32, byte_offset: usize) -> Self {
        Self {
            generation,
            byte_offset,
        }
    }

    /// The pool generation this address belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Byte offset from the start of the pool buffer
    /// (`word_offset * word_size`).
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The word this address points at.
    pub fn word_offset(&self, word_size: u32) -> WordOffset {
        WordOffset((self.byte_offset / word_size.max(1) as usize) as u32)
    }

    /// Forge an address from raw parts.
    ///
    /// Useful for probing the lenient `free` contract. A forged address
    /// only matches if it equals one the pool actually issued.
    pub fn from_raw_parts(generation: u32, byte_offset: usize) -> Self {
        Self::new(generation, byte_offset)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(gen={}, byte={})", self.generation, self.byte_offset)
    }
}
