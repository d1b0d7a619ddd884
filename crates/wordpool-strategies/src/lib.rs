//! Reference placement strategies for the Wordpool allocator simulator.
//!
//! Both reference strategies score every hole by `|size - needed|` and
//! scan the descriptor in ascending offset order:
//!
//! 1. [`BestFit`]: keeps the hole with the smallest difference.
//! 2. [`WorstFit`]: keeps the hole with the largest difference.
//!
//! The running best is seeded from the first hole and only replaced on a
//! strict improvement, so ties always resolve to the earliest hole.
//! [`strategy_fn`] adapts a plain closure for ad-hoc policies.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod best_fit;
pub mod func;
pub mod worst_fit;

pub use best_fit::BestFit;
pub use func::{strategy_fn, FnStrategy};
pub use worst_fit::WorstFit;

use wordpool_core::{HoleList, WordCount, WordOffset};

/// Scan `holes` in order, keeping the first hole whose fit difference
/// `replaces` the running best.
fn select_by_diff(
    needed: WordCount,
    holes: &HoleList,
    replaces: impl Fn(u32, u32) -> bool,
) -> Option<WordOffset> {
    let mut iter = holes.iter();
    let first = iter.next()?;
    let mut best_offset = first.offset;
    let mut best_diff = first.size.abs_diff(needed);
    for hole in iter {
        let diff = hole.size.abs_diff(needed);
        if replaces(diff, best_diff) {
            best_diff = diff;
            best_offset = hole.offset;
        }
    }
    Some(best_offset)
}
