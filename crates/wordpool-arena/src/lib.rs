//! Word-addressable pool simulation for Wordpool.
//!
//! Provides a fixed-size byte buffer divided into words, a block
//! directory that partitions it into holes and allocated regions, and
//! the [`MemoryManager`] that places requests through a pluggable
//! [`PlacementStrategy`](wordpool_core::PlacementStrategy).
//!
//! # Architecture
//!
//! ```text
//! MemoryManager (engine, sole mutator)
//! ├── PoolConfig (word size, capacity ceiling)
//! ├── WordPool (zeroed Vec<u8>, word_size × total_words bytes)
//! ├── BlockDirectory (ordered Region list, rebuilt then swapped)
//! ├── Box<dyn PlacementStrategy> (sees only a HoleList snapshot)
//! └── views: Bitmap, PoolStats, hole map dump
//! ```
//!
//! # Directory invariants
//!
//! - Regions are ordered by offset and tile `[0, total_words)` exactly.
//! - No region has zero size.
//! - No two neighbouring regions are both holes.
//! - The manager's free-word count equals the sum of hole sizes.
//!
//! The [`compliance`] module checks all of these.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod compliance;
pub mod config;
pub mod directory;
pub mod dump;
pub mod error;
pub mod handle;
pub mod manager;
pub mod pool;
pub mod stats;
pub mod status;

// Public re-exports for the primary API surface.
pub use bitmap::Bitmap;
pub use config::PoolConfig;
pub use directory::BlockDirectory;
pub use error::PoolError;
pub use handle::Address;
pub use manager::MemoryManager;
pub use pool::WordPool;
pub use stats::PoolStats;
pub use status::PoolStatus;
