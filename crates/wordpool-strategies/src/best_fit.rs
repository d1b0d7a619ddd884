//! Best-fit placement.

use wordpool_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

use crate::select_by_diff;

/// Picks the hole whose size is closest to the request.
///
/// Closeness is `|size - needed|`, so a hole one word short of the request
/// scores better than one two words too large. The engine refuses holes
/// that are too small, which turns such a pick into a failed allocation
/// rather than an overlapping one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        select_by_diff(needed, holes, |diff, best| diff < best)
    }

    fn name(&self) -> &str {
        "best_fit"
    }
}
