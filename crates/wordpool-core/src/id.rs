//! Strongly-typed word offsets and word counts.
//!
//! Every position and length inside the pool is measured in words, never
//! in bytes. Keeping the two apart at the type level stops an offset
//! from being passed where a size is expected (and vice versa).

use std::fmt;
use std::ops::{Add, Sub};

/// Index of a word within the pool, counted from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordOffset(pub u32);

impl WordOffset {
    /// Offset of the first word in the pool.
    pub const ZERO: Self = Self(0);

    /// The offset as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Byte position of this word for the given word size.
    pub fn to_bytes(self, word_size: u32) -> usize {
        self.0 as usize * word_size as usize
    }
}

impl fmt::Display for WordOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WordOffset {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl Add<WordCount> for WordOffset {
    type Output = WordOffset;

    fn add(self, rhs: WordCount) -> WordOffset {
        WordOffset(self.0 + rhs.0)
    }
}

impl Sub for WordOffset {
    type Output = WordCount;

    /// Distance in words between two offsets. `self` must not precede `rhs`.
    fn sub(self, rhs: WordOffset) -> WordCount {
        WordCount(self.0 - rhs.0)
    }
}

/// A number of words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordCount(pub u32);

impl WordCount {
    /// Zero words.
    pub const ZERO: Self = Self(0);

    /// Number of whole words needed to hold `bytes` bytes.
    ///
    /// Anything up to one word (including a zero-byte request) takes a
    /// single word; larger requests round up. Saturates at `u32::MAX`
    /// words, which is far beyond any pool the engine will build.
    pub fn for_bytes(bytes: usize, word_size: u32) -> Self {
        let word_size = word_size.max(1) as usize;
        if bytes <= word_size {
            return Self(1);
        }
        let words = bytes.div_ceil(word_size);
        Self(u32::try_from(words).unwrap_or(u32::MAX))
    }

    /// The count as a `usize`.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Size of this many words in bytes.
    pub fn to_bytes(self, word_size: u32) -> usize {
        self.0 as usize * word_size as usize
    }

    /// Absolute difference between two counts, as used by fit scoring.
    pub fn abs_diff(self, other: WordCount) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Whether this is zero words.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WordCount {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl Add for WordCount {
    type Output = WordCount;

    fn add(self, rhs: WordCount) -> WordCount {
        WordCount(self.0 + rhs.0)
    }
}

impl Sub for WordCount {
    type Output = WordCount;

    fn sub(self, rhs: WordCount) -> WordCount {
        WordCount(self.0 - rhs.0)
    }
}

impl std::iter::Sum for WordCount {
    fn sum<I: Iterator<Item = WordCount>>(iter: I) -> Self {
        WordCount(iter.map(|c| c.0).sum())
    }
}
