//! Directory invariant test helpers.
//!
//! These functions panic with a descriptive message when a directory or
//! manager breaks one of its structural invariants. Reused by the unit
//! tests, the integration tests and the property tests.

use wordpool_core::{WordCount, WordOffset};

use crate::directory::BlockDirectory;
use crate::manager::MemoryManager;

/// Assert that the regions cover `[0, total_words)` exactly, in order,
/// with no empty region.
pub fn assert_partition(dir: &BlockDirectory) {
    let mut cursor = WordOffset::ZERO;
    for (i, region) in dir.iter().enumerate() {
        assert!(
            !region.size.is_zero(),
            "region {i} ({region}) has zero size"
        );
        assert_eq!(
            region.offset, cursor,
            "region {i} ({region}) starts at {} but the previous region ended at {cursor}",
            region.offset
        );
        cursor = region.end();
    }
    assert_eq!(
        cursor.0,
        dir.total_words(),
        "regions cover {cursor} words, pool has {}",
        dir.total_words()
    );
    let total: WordCount = dir.iter().map(|r| r.size).sum();
    assert_eq!(total.0, dir.total_words());
}

/// Assert that no two neighbouring regions are both holes.
pub fn assert_coalesced(dir: &BlockDirectory) {
    for pair in dir.as_slice().windows(2) {
        assert!(
            !(pair[0].is_hole && pair[1].is_hole),
            "adjacent holes {} and {} were not coalesced",
            pair[0],
            pair[1]
        );
    }
}

/// Assert every structural invariant of a directory.
pub fn assert_directory_invariants(dir: &BlockDirectory) {
    assert_partition(dir);
    assert_coalesced(dir);
}

/// Assert directory invariants plus the free-word accounting of a manager.
pub fn assert_accounting(manager: &MemoryManager) {
    let dir = manager.directory();
    assert_directory_invariants(dir);
    assert_eq!(
        manager.words_available(),
        dir.free_words().0,
        "words_available disagrees with the sum of hole sizes"
    );
    assert_eq!(dir.total_words(), manager.total_words());
}
