//! Point-in-time pool statistics.

use wordpool_core::WordCount;

use crate::directory::BlockDirectory;

/// Summary of a pool's partition, computed from the block directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Pool length in words.
    pub total_words: u32,
    /// Words held by holes.
    pub free_words: u32,
    /// Words held by allocated regions.
    pub allocated_words: u32,
    /// Number of hole regions.
    pub hole_count: usize,
    /// Number of allocated regions.
    pub allocated_count: usize,
    /// Size of the largest hole (zero if there are none).
    pub largest_hole: WordCount,
}

impl PoolStats {
    /// Compute statistics for `dir`.
    pub fn from_directory(dir: &BlockDirectory) -> Self {
        let mut stats = Self {
            total_words: dir.total_words(),
            ..Self::default()
        };
        for region in dir.iter() {
            if region.is_hole {
                stats.free_words += region.size.0;
                stats.hole_count += 1;
                stats.largest_hole = stats.largest_hole.max(region.size);
            } else {
                stats.allocated_words += region.size.0;
                stats.allocated_count += 1;
            }
        }
        stats
    }

    /// Fraction of free words outside the largest hole, in `[0, 1]`.
    ///
    /// Zero when the pool has no free words or all of them are in one hole.
    pub fn fragmentation(&self) -> f64 {
        if self.free_words == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.largest_hole.0) / f64::from(self.free_words)
    }
}
