use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// A contiguous run of words from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// Window words joined by single spaces.
    pub text: String,
    /// Index of the first word (inclusive).
    pub start_word: usize,
    /// Index one past the last word (exclusive).
    pub end_word: usize,
}

impl TextChunk {
    pub fn new(text: String, start_word: usize, end_word: usize) -> Self {
        Self {
            text,
            start_word,
            end_word,
        }
    }

    pub fn word_count(&self) -> usize {
        self.end_word - self.start_word
    }
}

/// Window size and overlap, both in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkConfig {
    /// Creates a validated configuration.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        let config = Self {
            chunk_size,
            overlap,
        };
        config.validate()?;
        Ok(config)
    }

    /// The window must advance: `overlap < chunk_size`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 || self.overlap >= self.chunk_size {
            return Err(ConfigError::InvalidChunking {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    /// Words the window advances per step.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}
