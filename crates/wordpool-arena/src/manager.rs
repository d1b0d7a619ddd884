//! The allocation and release engine.
//!
//! [`MemoryManager`] owns the pool buffer, the block directory and the
//! active placement strategy. It is the only component that mutates the
//! directory.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► initialize(n) ──► allocate / free ... ──► shutdown()
//!               ▲                                        │
//!               └──────────── initialize(m) ◄────────────┘
//! ```
//!
//! Each `initialize` starts a new generation. Addresses carry the
//! generation they were issued in, so an address that outlives its pool
//! can never free or read a region of the next one.

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::{debug, trace, warn};
use wordpool_core::{HoleList, PlacementStrategy, Region, WordCount};

use crate::bitmap::Bitmap;
use crate::config::PoolConfig;
use crate::directory::BlockDirectory;
use crate::dump::{dump_hole_map, write_hole_map};
use crate::error::PoolError;
use crate::handle::Address;
use crate::pool::WordPool;
use crate::stats::PoolStats;

/// A simulated word-addressable memory pool with pluggable placement.
///
/// Single-threaded by construction: every mutating operation takes
/// `&mut self`, and placement strategies only ever see a `&HoleList`.
///
/// # Examples
///
/// ```
/// use wordpool_arena::MemoryManager;
/// use wordpool_strategies::BestFit;
///
/// let mut mm = MemoryManager::new(8, BestFit).unwrap();
/// mm.initialize(64);
///
/// let a = mm.allocate(20).unwrap(); // 3 words
/// let b = mm.allocate(8).unwrap(); // 1 word
/// assert_eq!(mm.get_list().to_string(), "[4, 60]");
///
/// mm.free(a);
/// assert_eq!(mm.get_list().to_string(), "[0, 3] - [4, 60]");
/// mm.free(b);
/// assert_eq!(mm.get_list().to_string(), "[0, 64]");
/// ```
pub struct MemoryManager {
    config: PoolConfig,
    strategy: Box<dyn PlacementStrategy>,
    pool: Option<WordPool>,
    directory: BlockDirectory,
    words_available: u32,
    generation: u32,
}

impl MemoryManager {
    /// Create an uninitialized manager with the given word size.
    ///
    /// Fails if `word_size` is zero.
    pub fn new(
        word_size: u32,
        strategy: impl PlacementStrategy + 'static,
    ) -> Result<Self, PoolError> {
        Self::with_config(PoolConfig::new(word_size), strategy)
    }

    /// Create an uninitialized manager from a custom config.
    pub fn with_config(
        config: PoolConfig,
        strategy: impl PlacementStrategy + 'static,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            config,
            strategy: Box::new(strategy),
            pool: None,
            directory: BlockDirectory::new(),
            words_available: 0,
            generation: 0,
        })
    }

    // ── Lifecycle ──────────────────────────────────────────────

    /// Build a fresh pool of `size_in_words` words, all free.
    ///
    /// Requests above the configured ceiling are clamped to it. An
    /// existing pool is shut down first.
    pub fn initialize(&mut self, size_in_words: usize) {
        if self.pool.is_some() {
            self.shutdown();
        }
        let words = self.config.clamp_words(size_in_words);
        let clamped = words as usize != size_in_words;

        self.generation = self.generation.wrapping_add(1);
        self.pool = Some(WordPool::new(self.config.word_size, words));
        self.directory.reset(words);
        self.words_available = words;

        debug!(
            words,
            bytes = self.memory_limit(),
            generation = self.generation,
            clamped,
            "pool initialized"
        );
    }

    /// Release the pool buffer and empty the directory.
    ///
    /// Idempotent: shutting down an uninitialized manager does nothing.
    pub fn shutdown(&mut self) {
        if self.pool.take().is_some() {
            debug!(generation = self.generation, "pool shut down");
        }
        self.directory.clear();
        self.words_available = 0;
    }

    /// Whether a pool is currently allocated.
    pub fn is_initialized(&self) -> bool {
        self.pool.is_some()
    }

    // ── Allocation ─────────────────────────────────────────────

    /// Allocate enough whole words to hold `size_in_bytes` bytes.
    ///
    /// Requests up to one word (including zero bytes) take one word.
    /// Returns `None` if the pool is exhausted, if no strategy pick is
    /// usable, or if the pool is not initialized. A failed call leaves
    /// the pool unchanged. The allocated bytes are zeroed.
    #[must_use = "dropping the address leaks the allocation"]
    pub fn allocate(&mut self, size_in_bytes: usize) -> Option<Address> {
        if self.pool.is_none() {
            return None;
        }
        let needed = WordCount::for_bytes(size_in_bytes, self.config.word_size);
        if self.words_available == 0 || needed.0 > self.words_available {
            trace!(
                %needed,
                available = self.words_available,
                "allocation refused: not enough free words"
            );
            return None;
        }

        let holes = self.directory.holes();
        let Some(offset) = self.strategy.place(needed, &holes) else {
            trace!(%needed, strategy = self.strategy.name(), "strategy found no hole");
            return None;
        };

        let Some(index) = self.directory.hole_at(offset) else {
            warn!(
                %offset,
                strategy = self.strategy.name(),
                "placement strategy chose an offset that does not start a hole"
            );
            return None;
        };
        let Some(region) = self.directory.split(index, needed) else {
            warn!(
                %offset,
                %needed,
                strategy = self.strategy.name(),
                "placement strategy chose a hole smaller than the request"
            );
            return None;
        };

        self.words_available -= needed.0;
        if let Some(pool) = self.pool.as_mut() {
            pool.zero(region.offset, region.size);
        }

        trace!(offset = %region.offset, words = %region.size, "allocated");
        Some(Address::new(
            self.generation,
            region.offset.to_bytes(self.config.word_size),
        ))
    }

    /// Return the allocation at `address` to the pool.
    ///
    /// The region becomes a hole and is merged with any neighbouring
    /// holes. Addresses that do not start an allocated region of the
    /// current generation are ignored. Returns the number of words
    /// released, or `None` if nothing matched.
    pub fn free(&mut self, address: Address) -> Option<WordCount> {
        let released = self
            .locate(&address)
            .and_then(|index| self.directory.release(index));

        match released {
            Some(words) => {
                self.words_available += words.0;
                trace!(%address, %words, "freed");
            }
            None => debug!(%address, "free ignored: address does not match an allocation"),
        }
        released
    }

    /// Replace the active placement strategy.
    pub fn set_allocator(&mut self, strategy: impl PlacementStrategy + 'static) {
        self.strategy = Box::new(strategy);
        debug!(strategy = self.strategy.name(), "placement strategy replaced");
    }

    /// Name of the active placement strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ── Introspection ──────────────────────────────────────────

    /// The current hole descriptor.
    pub fn get_list(&self) -> HoleList {
        self.directory.holes()
    }

    /// The hole descriptor in its 16-bit flat form.
    ///
    /// Fails with [`PoolError::Descriptor`] once any offset or size exceeds
    /// `i16::MAX`.
    pub fn get_list_i16(&self) -> Result<Vec<i16>, PoolError> {
        Ok(self.get_list().to_i16()?)
    }

    /// Encoded occupancy bitmap: a 2-byte little-endian length header
    /// followed by one bit per word, most significant bit first.
    pub fn get_bitmap(&self) -> Vec<u8> {
        self.bitmap().into_bytes()
    }

    /// Occupancy bitmap with decoding helpers.
    pub fn bitmap(&self) -> Bitmap {
        Bitmap::encode(&self.directory)
    }

    /// The whole pool buffer, or `None` before `initialize`.
    pub fn memory_start(&self) -> Option<&[u8]> {
        self.pool.as_ref().map(WordPool::as_bytes)
    }

    /// Pool size in bytes (zero when uninitialized).
    pub fn memory_limit(&self) -> usize {
        self.pool.as_ref().map_or(0, WordPool::byte_len)
    }

    /// Bytes per word.
    pub fn word_size(&self) -> u32 {
        self.config.word_size
    }

    /// Pool size in words (zero when uninitialized).
    pub fn total_words(&self) -> u32 {
        self.directory.total_words()
    }

    /// Number of free words.
    pub fn words_available(&self) -> u32 {
        self.words_available
    }

    /// Generation of the current pool. Zero before the first `initialize`.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The active configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Read-only view of the block directory.
    pub fn directory(&self) -> &BlockDirectory {
        &self.directory
    }

    /// Regions in ascending offset order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.directory.iter()
    }

    /// Partition summary.
    pub fn stats(&self) -> PoolStats {
        PoolStats::from_directory(&self.directory)
    }

    /// Storage of the allocation at `address`, exactly as long as the
    /// allocated region.
    pub fn bytes(&self, address: &Address) -> Option<&[u8]> {
        let region = self.directory.as_slice()[self.locate(address)?];
        self.pool.as_ref()?.words(region.offset, region.size)
    }

    /// Mutable storage of the allocation at `address`.
    pub fn bytes_mut(&mut self, address: &Address) -> Option<&mut [u8]> {
        let region = self.directory.as_slice()[self.locate(address)?];
        self.pool.as_mut()?.words_mut(region.offset, region.size)
    }

    // ── Export ─────────────────────────────────────────────────

    /// Write the hole map (`[offset, size] - ...`) to the file at `path`,
    /// creating or truncating it.
    pub fn dump_memory_map(&self, path: impl AsRef<Path>) -> Result<(), PoolError> {
        dump_hole_map(&self.get_list(), path.as_ref())
    }

    /// Write the hole map to any sink.
    pub fn write_memory_map<W: Write>(&self, sink: W) -> Result<(), PoolError> {
        write_hole_map(&self.get_list(), sink)
    }

    /// Directory index of the allocated region that `address` starts.
    fn locate(&self, address: &Address) -> Option<usize> {
        let pool = self.pool.as_ref()?;
        if address.generation != self.generation || address.byte_offset >= pool.byte_len() {
            return None;
        }
        if address.byte_offset % self.config.word_size as usize != 0 {
            return None;
        }
        self.directory
            .allocated_at(address.word_offset(self.config.word_size))
    }
}

impl Drop for MemoryManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for MemoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManager")
            .field("word_size", &self.config.word_size)
            .field("strategy", &self.strategy.name())
            .field("generation", &self.generation)
            .field("total_words", &self.total_words())
            .field("words_available", &self.words_available)
            .field("regions", &self.directory.len())
            .finish()
    }
}
