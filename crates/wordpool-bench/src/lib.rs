//! Benchmark workloads for the Wordpool allocator simulator.
//!
//! - [`alloc_free_trace`]: deterministic mixed allocate/free trace via seed
//! - [`replay_trace`]: drive a [`MemoryManager`] through a trace
//! - [`fragmented_manager`]: a pool with many small holes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wordpool_arena::{Address, MemoryManager, PoolError};
use wordpool_core::PlacementStrategy;

/// One step of a benchmark trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOp {
    /// Allocate this many bytes.
    Alloc(usize),
    /// Free the live allocation at this index (modulo the live count).
    Free(usize),
}

/// Build a deterministic trace of `len` operations.
///
/// Roughly two allocations per free. Allocation sizes fall in
/// `1..=max_bytes`.
pub fn alloc_free_trace(len: usize, max_bytes: usize, seed: u64) -> Vec<TraceOp> {
    let max_bytes = max_bytes.max(1);
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    (0..len)
        .map(|_| {
            let roll = next();
            if roll % 3 == 0 {
                TraceOp::Free(next() as usize)
            } else {
                TraceOp::Alloc(1 + (next() as usize) % max_bytes)
            }
        })
        .collect()
}

/// Run `trace` against `mm`, returning the number of successful allocations.
///
/// Allocations still live at the end of the trace are freed.
pub fn replay_trace(mm: &mut MemoryManager, trace: &[TraceOp]) -> usize {
    let mut live: Vec<Address> = Vec::new();
    let mut placed = 0;
    for op in trace {
        match *op {
            TraceOp::Alloc(bytes) => {
                if let Some(addr) = mm.allocate(bytes) {
                    live.push(addr);
                    placed += 1;
                }
            }
            TraceOp::Free(pick) => {
                if !live.is_empty() {
                    let addr = live.swap_remove(pick % live.len());
                    mm.free(addr);
                }
            }
        }
    }
    for addr in live {
        mm.free(addr);
    }
    placed
}

/// Build a pool of `words` one-byte words where every other word is free.
///
/// The resulting hole descriptor has `words / 2` entries, the worst case
/// for strategy scans.
pub fn fragmented_manager(
    words: usize,
    strategy: impl PlacementStrategy + 'static,
) -> Result<MemoryManager, PoolError> {
    let mut mm = MemoryManager::new(1, strategy)?;
    mm.initialize(words);
    let blocks: Vec<Address> = std::iter::from_fn(|| mm.allocate(1)).collect();
    for addr in blocks.into_iter().step_by(2) {
        mm.free(addr);
    }
    Ok(mm)
}
