//! The hole descriptor: a compact, hole-only view of the block directory.
//!
//! A [`HoleList`] is rebuilt from the directory on every request and
//! handed to the active placement strategy. It is never stored by the
//! engine. The flat integer form (`[count, off0, size0, off1, size1, ..]`)
//! is available through [`HoleList::to_raw`] and, for consumers bound to
//! 16-bit fields, [`HoleList::to_i16`].

use std::fmt;

use smallvec::SmallVec;

use crate::error::DescriptorError;
use crate::id::{WordCount, WordOffset};

/// A single free region, as seen by a placement strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hole {
    /// First word of the hole.
    pub offset: WordOffset,
    /// Length of the hole in words.
    pub size: WordCount,
}

impl Hole {
    /// Create a hole descriptor entry.
    pub fn new(offset: WordOffset, size: WordCount) -> Self {
        Self { offset, size }
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.offset, self.size)
    }
}

/// Holes in ascending offset order.
///
/// Most pools carry only a handful of holes at a time, so the list is
/// stored inline up to eight entries before spilling to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleList {
    holes: SmallVec<[Hole; 8]>,
}

impl HoleList {
    /// An empty descriptor.
    pub fn new() -> Self {
        Self {
            holes: SmallVec::new(),
        }
    }

    /// Append a hole. Holes must be pushed in ascending offset order.
    pub fn push(&mut self, hole: Hole) {
        debug_assert!(
            self.holes.last().is_none_or(|last| last.offset < hole.offset),
            "holes must be pushed in ascending offset order"
        );
        self.holes.push(hole);
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Whether the descriptor contains no holes.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Iterate over holes in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Hole> {
        self.holes.iter()
    }

    /// The holes as a slice.
    pub fn as_slice(&self) -> &[Hole] {
        &self.holes
    }

    /// The hole starting at `offset`, if any.
    pub fn find(&self, offset: WordOffset) -> Option<&Hole> {
        self.holes.iter().find(|h| h.offset == offset)
    }

    /// Sum of all hole sizes.
    pub fn total_words(&self) -> WordCount {
        self.holes.iter().map(|h| h.size).sum()
    }

    /// The largest hole. Ties resolve to the lowest offset.
    pub fn largest(&self) -> Option<&Hole> {
        self.holes
            .iter()
            .reduce(|best, h| if h.size > best.size { h } else { best })
    }

    /// Flat form: element 0 is the hole count, followed by
    /// `(offset, size)` pairs. Length is `2 * len() + 1`.
    pub fn to_raw(&self) -> Vec<u32> {
        let mut raw = Vec::with_capacity(2 * self.holes.len() + 1);
        raw.push(self.holes.len() as u32);
        for hole in &self.holes {
            raw.push(hole.offset.0);
            raw.push(hole.size.0);
        }
        raw
    }

    /// Flat form with 16-bit signed fields.
    ///
    /// Fails on the first value above `i16::MAX` rather than truncating it.
    pub fn to_i16(&self) -> Result<Vec<i16>, DescriptorError> {
        self.to_raw()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                i16::try_from(value).map_err(|_| DescriptorError::FieldOverflow { value, index })
            })
            .collect()
    }

    /// Parse the flat form produced by [`HoleList::to_raw`].
    pub fn from_raw(raw: &[u32]) -> Result<Self, DescriptorError> {
        let Some((&count, pairs)) = raw.split_first() else {
            return Err(DescriptorError::Truncated {
                expected: 1,
                actual: 0,
            });
        };
        let expected = (count as usize).saturating_mul(2).saturating_add(1);
        if raw.len() != expected {
            return Err(DescriptorError::Truncated {
                expected,
                actual: raw.len(),
            });
        }
        Ok(pairs
            .chunks_exact(2)
            .map(|pair| Hole::new(WordOffset(pair[0]), WordCount(pair[1])))
            .collect())
    }
}

impl FromIterator<Hole> for HoleList {
    fn from_iter<I: IntoIterator<Item = Hole>>(iter: I) -> Self {
        Self {
            holes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HoleList {
    type Item = &'a Hole;
    type IntoIter = std::slice::Iter<'a, Hole>;

    fn into_iter(self) -> Self::IntoIter {
        self.holes.iter()
    }
}

/// Renders `[offset, size] - [offset, size] - ...` with no trailing
/// separator. An empty list renders as the empty string.
impl fmt::Display for HoleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hole) in self.holes.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{hole}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HoleList {
        [
            Hole::new(WordOffset(0), WordCount(10)),
            Hole::new(WordOffset(10), WordCount(4)),
            Hole::new(WordOffset(14), WordCount(7)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn raw_layout_is_count_then_pairs() {
        assert_eq!(sample().to_raw(), vec![3, 0, 10, 10, 4, 14, 7]);
    }

    #[test]
    fn empty_raw_is_single_zero() {
        assert_eq!(HoleList::new().to_raw(), vec![0]);
    }

    #[test]
    fn from_raw_parses_pairs() {
        let list = HoleList::from_raw(&[2, 0, 5, 9, 3]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1], Hole::new(WordOffset(9), WordCount(3)));
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        assert_eq!(
            HoleList::from_raw(&[2, 0, 5]),
            Err(DescriptorError::Truncated {
                expected: 5,
                actual: 3
            })
        );
        assert!(matches!(
            HoleList::from_raw(&[]),
            Err(DescriptorError::Truncated { .. })
        ));
    }

    #[test]
    fn to_i16_fits_small_pools() {
        assert_eq!(sample().to_i16().unwrap(), vec![3, 0, 10, 10, 4, 14, 7]);
    }

    #[test]
    fn to_i16_fails_fast_on_overflow() {
        let list: HoleList = [Hole::new(WordOffset(0), WordCount(65_536))].into_iter().collect();
        assert_eq!(
            list.to_i16(),
            Err(DescriptorError::FieldOverflow {
                value: 65_536,
                index: 2
            })
        );
    }

    #[test]
    fn display_joins_with_dash() {
        let list: HoleList = [
            Hole::new(WordOffset(0), WordCount(5)),
            Hole::new(WordOffset(9), WordCount(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.to_string(), "[0, 5] - [9, 3]");
    }

    #[test]
    fn display_single_and_empty() {
        let one: HoleList = [Hole::new(WordOffset(2), WordCount(1))].into_iter().collect();
        assert_eq!(one.to_string(), "[2, 1]");
        assert_eq!(HoleList::new().to_string(), "");
    }

    #[test]
    fn largest_prefers_lowest_offset_on_tie() {
        let list: HoleList = [
            Hole::new(WordOffset(0), WordCount(3)),
            Hole::new(WordOffset(5), WordCount(7)),
            Hole::new(WordOffset(20), WordCount(7)),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.largest().unwrap().offset, WordOffset(5));
        assert_eq!(list.total_words(), WordCount(17));
    }

    #[test]
    fn find_by_offset() {
        let list = sample();
        assert_eq!(list.find(WordOffset(10)).unwrap().size, WordCount(4));
        assert!(list.find(WordOffset(11)).is_none());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn raw_length_is_two_per_hole_plus_one(
                sizes in proptest::collection::vec(1u32..64, 0..20),
            ) {
                let mut offset = 0u32;
                let mut list = HoleList::new();
                for size in &sizes {
                    list.push(Hole::new(WordOffset(offset), WordCount(*size)));
                    // Leave an allocated gap so offsets stay strictly increasing.
                    offset += size + 1;
                }
                let raw = list.to_raw();
                prop_assert_eq!(raw.len(), 2 * sizes.len() + 1);
                prop_assert_eq!(raw[0] as usize, sizes.len());
                prop_assert_eq!(HoleList::from_raw(&raw).unwrap(), list);
            }
        }
    }
}
