//! The block directory: an ordered partition of the pool into regions.
//!
//! [`BlockDirectory`] is the only record of which words are allocated.
//! It holds regions sorted by offset and maintains three invariants
//! after every mutation:
//!
//! - the regions cover `[0, total_words)` with no gaps or overlaps;
//! - every region is at least one word long;
//! - no two neighbouring regions are both holes.
//!
//! Mutations never edit the region list in place. [`split`] and
//! [`release`] compute the replacement list and swap it in with a single
//! assignment, so no index into the old list is ever used after the
//! list changes.
//!
//! [`split`]: BlockDirectory::split
//! [`release`]: BlockDirectory::release

use wordpool_core::{Hole, HoleList, Region, WordCount, WordOffset};

/// Ordered, non-overlapping regions that exactly partition the pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockDirectory {
    regions: Vec<Region>,
    total_words: u32,
}

impl BlockDirectory {
    /// An empty directory covering zero words.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            total_words: 0,
        }
    }

    /// A directory with a single hole spanning `total_words` words.
    pub fn spanning(total_words: u32) -> Self {
        let mut dir = Self::new();
        dir.reset(total_words);
        dir
    }

    /// Replace all regions with one hole spanning `total_words` words.
    ///
    /// A zero-word pool has no regions at all.
    pub fn reset(&mut self, total_words: u32) {
        self.total_words = total_words;
        self.regions = if total_words == 0 {
            Vec::new()
        } else {
            vec![Region::hole(WordOffset::ZERO, WordCount(total_words))]
        };
    }

    /// Drop every region.
    pub fn clear(&mut self) {
        self.regions = Vec::new();
        self.total_words = 0;
    }

    /// Number of words this directory partitions.
    pub fn total_words(&self) -> u32 {
        self.total_words
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether there are no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Regions as a slice.
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// Build the hole descriptor for the current partition.
    pub fn holes(&self) -> HoleList {
        self.regions
            .iter()
            .filter(|r| r.is_hole)
            .map(|r| Hole::new(r.offset, r.size))
            .collect()
    }

    /// Total words held by holes.
    pub fn free_words(&self) -> WordCount {
        self.regions.iter().filter(|r| r.is_hole).map(|r| r.size).sum()
    }

    /// Index of the region starting exactly at `offset`.
    pub fn position(&self, offset: WordOffset) -> Option<usize> {
        self.regions
            .binary_search_by_key(&offset, |r| r.offset)
            .ok()
    }

    /// Index of the hole starting exactly at `offset`.
    pub fn hole_at(&self, offset: WordOffset) -> Option<usize> {
        self.position(offset).filter(|&i| self.regions[i].is_hole)
    }

    /// Index of the allocated region starting exactly at `offset`.
    pub fn allocated_at(&self, offset: WordOffset) -> Option<usize> {
        self.position(offset).filter(|&i| !self.regions[i].is_hole)
    }

    /// Carve `needed` words from the front of the hole at `index`.
    ///
    /// Whatever remains of the hole becomes a new hole directly after the
    /// allocated region. Returns the allocated region, or `None` (leaving
    /// the directory untouched) if `index` is not a hole of at least
    /// `needed` words or `needed` is zero.
    pub fn split(&mut self, index: usize, needed: WordCount) -> Option<Region> {
        let target = *self.regions.get(index)?;
        if !target.is_hole || needed.is_zero() || target.size < needed {
            return None;
        }

        let allocated = Region::allocated(target.offset, needed);
        let remainder = target.size - needed;

        let mut next = Vec::with_capacity(self.regions.len() + 1);
        next.extend_from_slice(&self.regions[..index]);
        next.push(allocated);
        if !remainder.is_zero() {
            next.push(Region::hole(allocated.end(), remainder));
        }
        next.extend_from_slice(&self.regions[index + 1..]);
        self.regions = next;

        Some(allocated)
    }

    /// Turn the allocated region at `index` back into a hole and coalesce.
    ///
    /// The following hole (if contiguous) is merged first, then the
    /// preceding hole (if contiguous) is merged with the result. Returns
    /// the number of words released, or `None` if `index` is not an
    /// allocated region.
    pub fn release(&mut self, index: usize) -> Option<WordCount> {
        let target = *self.regions.get(index)?;
        if target.is_hole {
            return None;
        }

        let mut merged = Region::hole(target.offset, target.size);
        let mut first = index;
        let mut last = index;

        if let Some(next) = self.regions.get(index + 1) {
            if next.is_hole && merged.is_contiguous_with(next) {
                merged.size = merged.size + next.size;
                last = index + 1;
            }
        }
        if let Some(prev) = index.checked_sub(1).map(|i| self.regions[i]) {
            if prev.is_hole && prev.is_contiguous_with(&merged) {
                merged = Region::hole(prev.offset, prev.size + merged.size);
                first = index - 1;
            }
        }

        let mut next = Vec::with_capacity(self.regions.len());
        next.extend_from_slice(&self.regions[..first]);
        next.push(merged);
        next.extend_from_slice(&self.regions[last + 1..]);
        self.regions = next;

        Some(target.size)
    }

    /// Per-word occupancy: `true` for allocated words, in word order.
    pub fn occupancy(&self) -> impl Iterator<Item = bool> + '_ {
        self.regions
            .iter()
            .flat_map(|r| std::iter::repeat_n(!r.is_hole, r.size.get()))
    }
}
