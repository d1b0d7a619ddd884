//! Wordpool: a word-addressable memory pool simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Wordpool sub-crates. For most users, adding `wordpool` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wordpool::prelude::*;
//!
//! let mut mm = MemoryManager::new(4, BestFit).unwrap();
//! mm.initialize(12);
//!
//! let a = mm.allocate(20).unwrap(); // 5 words at offset 0
//! let _b = mm.allocate(16).unwrap(); // 4 words at offset 5
//! mm.free(a);
//!
//! assert_eq!(mm.get_list().to_raw(), vec![2, 0, 5, 9, 3]);
//! assert_eq!(mm.get_list().to_string(), "[0, 5] - [9, 3]");
//!
//! // Words 5..9 are allocated: 0000_0111 1000_0000.
//! assert_eq!(mm.get_bitmap(), vec![2, 0, 0b0000_0111, 0b1000_0000]);
//!
//! // Swap in a custom strategy at any time.
//! mm.set_allocator(strategy_fn("last_hole", |_, holes: &HoleList| {
//!     holes.iter().last().map(|h| h.offset)
//! }));
//! let c = mm.allocate(4).unwrap();
//! assert_eq!(c.byte_offset(), 9 * 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wordpool-core` | Word ids, regions, hole descriptor, strategy trait |
//! | [`arena`] | `wordpool-arena` | Pool buffer, block directory, engine, bitmap, dump |
//! | [`strategies`] | `wordpool-strategies` | Best-fit, worst-fit, closure strategies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Pool buffer, block directory and allocation engine (`wordpool-arena`).
pub use wordpool_arena as arena;

/// Core ids, regions, descriptors and the strategy trait (`wordpool-core`).
pub use wordpool_core as types;

/// Reference placement strategies (`wordpool-strategies`).
///
/// Includes [`strategies::BestFit`], [`strategies::WorstFit`] and
/// [`strategies::strategy_fn`] for closures.
pub use wordpool_strategies as strategies;

/// Common imports for typical Wordpool usage.
///
/// ```rust
/// use wordpool::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use wordpool_arena::{Address, MemoryManager, PoolConfig, PoolStats};

    // Errors
    pub use wordpool_arena::{PoolError, PoolStatus};

    // Core types and traits
    pub use wordpool_core::{Hole, HoleList, PlacementStrategy, WordCount, WordOffset};

    // Strategies
    pub use wordpool_strategies::{strategy_fn, BestFit, WorstFit};
}
