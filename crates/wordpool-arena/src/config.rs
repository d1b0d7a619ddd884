//! Pool configuration parameters.

use crate::error::PoolError;

/// Configuration for a [`MemoryManager`](crate::MemoryManager).
///
/// Controls the word geometry and the capacity ceiling applied by
/// `initialize`. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Bytes per word. Must be at least 1.
    pub word_size: u32,

    /// Largest pool `initialize` will build, in words. Larger requests are
    /// clamped to this value.
    ///
    /// Default: [`PoolConfig::MAX_WORDS`]. Must be in `1..=MAX_WORDS`.
    pub max_words: u32,
}

impl PoolConfig {
    /// Hard capacity ceiling of the simulated pool, in words.
    pub const MAX_WORDS: u32 = 65_536;

    /// Create a config for the given word size with the default ceiling.
    pub fn new(word_size: u32) -> Self {
        Self {
            word_size,
            max_words: Self::MAX_WORDS,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.word_size == 0 {
            return Err(PoolError::InvalidConfig {
                reason: "word_size must be at least 1 byte".to_string(),
            });
        }
        if self.max_words == 0 || self.max_words > Self::MAX_WORDS {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_words ({}) must be in 1..={}",
                    self.max_words,
                    Self::MAX_WORDS
                ),
            });
        }
        Ok(())
    }

    /// Apply the capacity ceiling to a requested word count.
    pub fn clamp_words(&self, requested: usize) -> u32 {
        requested.min(self.max_words as usize) as u32
    }

    /// Largest pool size in bytes under this config.
    pub fn max_bytes(&self) -> usize {
        self.max_words as usize * self.word_size as usize
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
