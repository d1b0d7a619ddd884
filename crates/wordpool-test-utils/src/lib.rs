//! Test utilities and mock placement strategies for Wordpool development.
//!
//! Provides scripted [`PlacementStrategy`] implementations for exercising
//! the engine's handling of strategy results, a [`RecordingStrategy`]
//! wrapper that captures every descriptor it is shown, and a [`holes`]
//! shorthand for building descriptors in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use wordpool_core::{Hole, HoleList, PlacementStrategy, WordCount, WordOffset};

/// Build a descriptor from `(offset, size)` pairs.
pub fn holes(pairs: &[(u32, u32)]) -> HoleList {
    pairs
        .iter()
        .map(|&(offset, size)| Hole::new(WordOffset(offset), WordCount(size)))
        .collect()
}

/// Always answers with the same offset, whether or not it is a hole.
pub struct FixedOffset(pub WordOffset);

impl PlacementStrategy for FixedOffset {
    fn name(&self) -> &str {
        "fixed_offset"
    }

    fn place(&self, _needed: WordCount, _holes: &HoleList) -> Option<WordOffset> {
        Some(self.0)
    }
}

/// Never finds a hole.
pub struct NeverPlace;

impl PlacementStrategy for NeverPlace {
    fn name(&self) -> &str {
        "never_place"
    }

    fn place(&self, _needed: WordCount, _holes: &HoleList) -> Option<WordOffset> {
        None
    }
}

/// Picks the lowest-offset hole large enough for the request.
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &str {
        "first_fit"
    }

    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        holes.iter().find(|h| h.size >= needed).map(|h| h.offset)
    }
}

/// One call observed by a [`RecordingStrategy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementCall {
    pub needed: WordCount,
    pub holes: HoleList,
    pub chosen: Option<WordOffset>,
}

/// Shared log of placement calls.
///
/// Cloning shares the log, so a test can keep a handle while the
/// strategy itself is moved into the engine.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<PlacementCall>>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<PlacementCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, call: PlacementCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Delegates to an inner strategy and records every call.
pub struct RecordingStrategy<S> {
    inner: S,
    log: CallLog,
}

impl<S: PlacementStrategy> RecordingStrategy<S> {
    /// Wrap `inner`, returning the strategy and a handle to its log.
    pub fn new(inner: S) -> (Self, CallLog) {
        let log = CallLog::default();
        (
            Self {
                inner,
                log: log.clone(),
            },
            log,
        )
    }
}

impl<S: PlacementStrategy> PlacementStrategy for RecordingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        let chosen = self.inner.place(needed, holes);
        self.log.push(PlacementCall {
            needed,
            holes: holes.clone(),
            chosen,
        });
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holes_builds_descriptor_in_order() {
        let list = holes(&[(0, 10), (14, 4)]);
        assert_eq!(list.to_raw(), vec![2, 0, 10, 14, 4]);
    }

    #[test]
    fn first_fit_skips_small_holes() {
        let list = holes(&[(0, 2), (5, 8), (20, 9)]);
        assert_eq!(FirstFit.place(WordCount(6), &list), Some(WordOffset(5)));
        assert_eq!(FirstFit.place(WordCount(10), &list), None);
    }

    #[test]
    fn recording_strategy_logs_calls() {
        let (strategy, log) = RecordingStrategy::new(FixedOffset(WordOffset(7)));
        let list = holes(&[(7, 3)]);
        assert_eq!(strategy.place(WordCount(2), &list), Some(WordOffset(7)));
        assert_eq!(strategy.name(), "fixed_offset");
        assert_eq!(
            log.calls(),
            vec![PlacementCall {
                needed: WordCount(2),
                holes: list,
                chosen: Some(WordOffset(7)),
            }]
        );
    }
}
