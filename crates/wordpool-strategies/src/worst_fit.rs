//! Worst-fit placement.

use wordpool_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

use crate::select_by_diff;

/// Picks the hole whose size differs most from the request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        select_by_diff(needed, holes, |diff, best| diff > best)
    }

    fn name(&self) -> &str {
        "worst_fit"
    }
}
