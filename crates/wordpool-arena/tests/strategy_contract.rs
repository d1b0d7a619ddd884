//! Integration test: how the engine treats placement strategy answers.
//!
//! The strategy only ever sees a hole descriptor. Whatever it returns,
//! the engine must keep its directory consistent: a pick that does not
//! start a large-enough hole is refused and nothing changes.

use wordpool_arena::compliance::assert_accounting;
use wordpool_arena::MemoryManager;
use wordpool_core::{WordCount, WordOffset};
use wordpool_strategies::{BestFit, WorstFit};
use wordpool_test_utils::{holes, FirstFit, FixedOffset, NeverPlace, RecordingStrategy};

fn fragmented(strategy: impl wordpool_core::PlacementStrategy + 'static) -> MemoryManager {
    // [h0,10][u10,2][h12,4][u16,2][h18,7][u25,5]
    let mut mm = MemoryManager::new(1, FirstFit).unwrap();
    mm.initialize(30);
    let a = mm.allocate(10).unwrap();
    mm.allocate(2).unwrap();
    let b = mm.allocate(4).unwrap();
    mm.allocate(2).unwrap();
    let c = mm.allocate(7).unwrap();
    mm.allocate(5).unwrap();
    mm.free(a);
    mm.free(b);
    mm.free(c);
    mm.set_allocator(strategy);
    mm
}

#[test]
fn strategy_receives_needed_words_and_descriptor() {
    let (recorder, log) = RecordingStrategy::new(BestFit);
    let mut mm = fragmented(recorder);
    mm.allocate(6).unwrap();

    let calls = log.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].needed, WordCount(6));
    assert_eq!(calls[0].holes, holes(&[(0, 10), (12, 4), (18, 7)]));
    assert_eq!(calls[0].chosen, Some(WordOffset(18)));
    assert_accounting(&mm);
}

#[test]
fn strategy_not_consulted_when_pool_cannot_satisfy() {
    let (recorder, log) = RecordingStrategy::new(BestFit);
    let mut mm = fragmented(recorder);
    assert_eq!(mm.words_available(), 21);
    assert!(mm.allocate(22).is_none());
    assert!(log.is_empty());
}

#[test]
fn strategy_not_consulted_on_exhausted_pool() {
    let (recorder, log) = RecordingStrategy::new(BestFit);
    let mut mm = MemoryManager::new(2, recorder).unwrap();
    mm.initialize(3);
    mm.allocate(6).unwrap();
    assert_eq!(log.len(), 1);
    assert!(mm.allocate(0).is_none());
    assert_eq!(log.len(), 1);
}

#[test]
fn enough_free_words_but_no_single_hole_fits() {
    // 21 free words, largest hole 10.
    let mut mm = fragmented(FirstFit);
    let before = mm.directory().clone();
    assert!(mm.allocate(11).is_none());
    assert_eq!(mm.directory(), &before);
}

#[test]
fn never_place_leaves_pool_untouched() {
    let mut mm = fragmented(NeverPlace);
    let before = mm.directory().clone();
    assert!(mm.allocate(1).is_none());
    assert_eq!(mm.directory(), &before);
    assert_eq!(mm.words_available(), 21);
}

#[test]
fn pick_inside_a_hole_is_refused() {
    let mut mm = fragmented(FixedOffset(WordOffset(3)));
    let before = mm.directory().clone();
    assert!(mm.allocate(1).is_none());
    assert_eq!(mm.directory(), &before);
}

#[test]
fn pick_of_an_allocated_region_is_refused() {
    let mut mm = fragmented(FixedOffset(WordOffset(10)));
    let before = mm.directory().clone();
    assert!(mm.allocate(1).is_none());
    assert_eq!(mm.directory(), &before);
}

#[test]
fn pick_of_exact_hole_start_is_honoured() {
    let mut mm = fragmented(FixedOffset(WordOffset(12)));
    let addr = mm.allocate(4).unwrap();
    assert_eq!(addr.byte_offset(), 12);
    assert_eq!(mm.get_list(), holes(&[(0, 10), (18, 7)]));
    assert_accounting(&mm);
}

#[test]
fn worst_fit_versus_best_fit_on_same_layout() {
    let mut best = fragmented(BestFit);
    let mut worst = fragmented(WorstFit);
    assert_eq!(best.allocate(4).unwrap().byte_offset(), 12);
    assert_eq!(worst.allocate(4).unwrap().byte_offset(), 0);
    assert_eq!(best.get_list(), holes(&[(0, 10), (18, 7)]));
    assert_eq!(worst.get_list(), holes(&[(4, 6), (12, 4), (18, 7)]));
}

#[test]
fn swapping_strategies_between_calls() {
    let mut mm = fragmented(BestFit);
    assert_eq!(mm.strategy_name(), "best_fit");
    assert_eq!(mm.allocate(7).unwrap().byte_offset(), 18);
    mm.set_allocator(WorstFit);
    assert_eq!(mm.strategy_name(), "worst_fit");
    assert_eq!(mm.allocate(1).unwrap().byte_offset(), 0);
    assert_accounting(&mm);
}
