//! The raw pool buffer and its word geometry.
//!
//! A [`WordPool`] is a zero-initialised `Vec<u8>` of
//! `total_words * word_size` bytes. It knows nothing about which words
//! are in use; that bookkeeping lives in the
//! [`BlockDirectory`](crate::directory::BlockDirectory).

use wordpool_core::{WordCount, WordOffset};

/// Contiguous byte storage addressed in words.
pub struct WordPool {
    /// Backing storage. Allocated to full size at creation.
    data: Vec<u8>,
    word_size: u32,
    total_words: u32,
}

impl WordPool {
    /// Create a zero-filled pool of `total_words` words.
    pub fn new(word_size: u32, total_words: u32) -> Self {
        let bytes = total_words as usize * word_size as usize;
        Self {
            data: vec![0u8; bytes],
            word_size,
            total_words,
        }
    }

    /// Bytes per word.
    pub fn word_size(&self) -> u32 {
        self.word_size
    }

    /// Pool length in words.
    pub fn total_words(&self) -> u32 {
        self.total_words
    }

    /// Pool length in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// The whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of the word run `[offset, offset + len)`.
    ///
    /// Returns `None` if the run extends past the end of the pool.
    pub fn words(&self, offset: WordOffset, len: WordCount) -> Option<&[u8]> {
        let (start, end) = self.byte_range(offset, len)?;
        Some(&self.data[start..end])
    }

    /// Mutable bytes of the word run `[offset, offset + len)`.
    pub fn words_mut(&mut self, offset: WordOffset, len: WordCount) -> Option<&mut [u8]> {
        let (start, end) = self.byte_range(offset, len)?;
        Some(&mut self.data[start..end])
    }

    /// Zero the word run `[offset, offset + len)`. Out-of-range runs are ignored.
    pub fn zero(&mut self, offset: WordOffset, len: WordCount) {
        if let Some(bytes) = self.words_mut(offset, len) {
            bytes.fill(0);
        }
    }

    fn byte_range(&self, offset: WordOffset, len: WordCount) -> Option<(usize, usize)> {
        let start = offset.to_bytes(self.word_size);
        let end = start.checked_add(len.to_bytes(self.word_size))?;
        if end > self.data.len() {
            return None;
        }
        Some((start, end))
    }
}
