//! Core types and traits for the Wordpool allocator simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the Wordpool workspace:
//! word-granular ids, directory regions, the hole descriptor handed to
//! placement strategies, and the [`PlacementStrategy`] trait itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hole;
pub mod id;
pub mod region;
pub mod strategy;

pub use error::DescriptorError;
pub use hole::{Hole, HoleList};
pub use id::{WordCount, WordOffset};
pub use region::Region;
pub use strategy::PlacementStrategy;
