//! Directory regions.

use std::fmt;

use crate::id::{WordCount, WordOffset};

/// One contiguous run of words sharing allocation status.
///
/// A region is either a hole (free) or an allocated block. The block
/// directory keeps regions ordered by `offset`, non-overlapping, and
/// never places two holes next to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Whether this region is free.
    pub is_hole: bool,
    /// First word of the region.
    pub offset: WordOffset,
    /// Length of the region in words. Always at least one.
    pub size: WordCount,
}

impl Region {
    /// A free region.
    pub fn hole(offset: WordOffset, size: WordCount) -> Self {
        Self {
            is_hole: true,
            offset,
            size,
        }
    }

    /// An allocated region.
    pub fn allocated(offset: WordOffset, size: WordCount) -> Self {
        Self {
            is_hole: false,
            offset,
            size,
        }
    }

    /// One past the last word of the region.
    pub fn end(&self) -> WordOffset {
        self.offset + self.size
    }

    /// Whether `next` starts exactly where this region ends.
    pub fn is_contiguous_with(&self, next: &Region) -> bool {
        self.end() == next.offset
    }

    /// Whether the word at `offset` lies inside this region.
    pub fn contains(&self, offset: WordOffset) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_hole { "hole" } else { "used" };
        write!(f, "{kind}[{}, {}]", self.offset, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_offset_plus_size() {
        let r = Region::allocated(WordOffset(4), WordCount(6));
        assert_eq!(r.end(), WordOffset(10));
        assert!(!r.is_hole);
    }

    #[test]
    fn contiguity() {
        let a = Region::hole(WordOffset(0), WordCount(4));
        let b = Region::allocated(WordOffset(4), WordCount(2));
        let c = Region::hole(WordOffset(7), WordCount(1));
        assert!(a.is_contiguous_with(&b));
        assert!(!b.is_contiguous_with(&c));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Region::hole(WordOffset(2), WordCount(3));
        assert!(!r.contains(WordOffset(1)));
        assert!(r.contains(WordOffset(2)));
        assert!(r.contains(WordOffset(4)));
        assert!(!r.contains(WordOffset(5)));
    }

    #[test]
    fn display_names_kind() {
        assert_eq!(Region::hole(WordOffset(0), WordCount(5)).to_string(), "hole[0, 5]");
        assert_eq!(Region::allocated(WordOffset(5), WordCount(1)).to_string(), "used[5, 1]");
    }
}
