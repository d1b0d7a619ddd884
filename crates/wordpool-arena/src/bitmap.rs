//! Bit-level occupancy encoding.
//!
//! Layout of an encoded bitmap:
//!
//! ```text
//! [len_lo][len_hi][occ_0][occ_1]...[occ_{len-1}]
//! ```
//!
//! `len` is the number of occupancy bytes, `ceil(total_words / 8)`, stored
//! as a little-endian `u16`. Each occupancy byte covers eight consecutive
//! words, most significant bit first: word `8k` is bit 7 of `occ_k`, word
//! `8k + 7` is bit 0. A set bit is an allocated word. Padding bits past
//! the last word are zero.

use wordpool_core::WordOffset;

use crate::directory::BlockDirectory;

/// Length of the little-endian byte-count header.
pub const HEADER_LEN: usize = 2;

/// An encoded occupancy bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    bytes: Vec<u8>,
}

impl Bitmap {
    /// Encode the occupancy of every word in `dir`.
    pub fn encode(dir: &BlockDirectory) -> Self {
        let occupancy_len = (dir.total_words() as usize).div_ceil(8);
        let mut bytes = vec![0u8; HEADER_LEN + occupancy_len];

        // Never exceeds 8192 under the pool capacity ceiling.
        let header = u16::try_from(occupancy_len).unwrap_or(u16::MAX);
        bytes[..HEADER_LEN].copy_from_slice(&header.to_le_bytes());

        for (word, used) in dir.occupancy().enumerate() {
            if used {
                bytes[HEADER_LEN + word / 8] |= 0x80 >> (word % 8);
            }
        }
        Self { bytes }
    }

    /// Occupancy byte count as declared by the header.
    pub fn declared_len(&self) -> u16 {
        u16::from_le_bytes([self.bytes[0], self.bytes[1]])
    }

    /// The packed occupancy bytes, without the header.
    pub fn occupancy(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Whether the word at `offset` is marked allocated.
    ///
    /// Words past the end of the encoded range read as free.
    pub fn is_allocated(&self, offset: WordOffset) -> bool {
        let word = offset.index();
        self.occupancy()
            .get(word / 8)
            .is_some_and(|byte| byte & (0x80 >> (word % 8)) != 0)
    }

    /// The full encoding, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the bitmap, returning the full encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpool_core::WordCount;

    #[test]
    fn first_three_of_eight_words_allocated() {
        let mut dir = BlockDirectory::spanning(8);
        dir.split(0, WordCount(3)).unwrap();
        let bitmap = Bitmap::encode(&dir);
        assert_eq!(bitmap.as_bytes(), &[1, 0, 0b1110_0000]);
        assert_eq!(bitmap.declared_len(), 1);
    }

    #[test]
    fn length_rounds_up_with_zero_padding() {
        let mut dir = BlockDirectory::spanning(10);
        dir.split(0, WordCount(10)).unwrap();
        let bitmap = Bitmap::encode(&dir);
        assert_eq!(bitmap.as_bytes(), &[2, 0, 0xFF, 0b1100_0000]);
        assert!(!bitmap.is_allocated(WordOffset(10)));
        assert!(!bitmap.is_allocated(WordOffset(15)));
    }

    #[test]
    fn header_is_little_endian() {
        let dir = BlockDirectory::spanning(8 * 300);
        let bitmap = Bitmap::encode(&dir);
        assert_eq!(&bitmap.as_bytes()[..2], &[0x2C, 0x01]);
        assert_eq!(bitmap.declared_len(), 300);
        assert_eq!(bitmap.occupancy().len(), 300);
        assert!(bitmap.occupancy().iter().all(|&b| b == 0));
    }

    #[test]
    fn interior_allocation_bits() {
        let mut dir = BlockDirectory::spanning(16);
        dir.split(0, WordCount(6)).unwrap();
        dir.split(1, WordCount(4)).unwrap();
        dir.release(0).unwrap();
        // Words 6..10 allocated.
        let bitmap = Bitmap::encode(&dir);
        assert_eq!(bitmap.occupancy(), &[0b0000_0011, 0b1100_0000]);
        assert!(bitmap.is_allocated(WordOffset(6)));
        assert!(bitmap.is_allocated(WordOffset(9)));
        assert!(!bitmap.is_allocated(WordOffset(10)));
    }

    #[test]
    fn empty_directory_is_header_only() {
        let bitmap = Bitmap::encode(&BlockDirectory::new());
        assert_eq!(bitmap.into_bytes(), vec![0, 0]);
    }

    #[test]
    fn full_pool_at_capacity_ceiling() {
        let mut dir = BlockDirectory::spanning(65_536);
        dir.split(0, WordCount(65_536)).unwrap();
        let bitmap = Bitmap::encode(&dir);
        assert_eq!(bitmap.declared_len(), 8192);
        assert_eq!(bitmap.as_bytes().len(), 2 + 8192);
        assert!(bitmap.occupancy().iter().all(|&b| b == 0xFF));
    }
}
