use tracing::debug;

use super::types::{ChunkConfig, TextChunk};
use crate::config::ConfigError;

/// Splits `text` into overlapping word windows.
///
/// Text of at most `chunk_size` words comes back unchanged as a single chunk.
/// Longer text is windowed with stride `chunk_size - overlap` until a window
/// would start at or past the last word; the final window may be short and is
/// still emitted.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<TextChunk>, ConfigError> {
    let config = ChunkConfig::new(chunk_size, overlap)?;
    Ok(chunk_with(text, &config))
}

/// Same as [`chunk`] but returns only the chunk strings.
pub fn chunk_strings(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>, ConfigError> {
    Ok(chunk(text, chunk_size, overlap)?
        .into_iter()
        .map(|c| c.text)
        .collect())
}

pub(crate) fn chunk_with(text: &str, config: &ChunkConfig) -> Vec<TextChunk> {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= config.chunk_size {
        return vec![TextChunk::new(text.to_string(), 0, words.len())];
    }

    let chunks: Vec<TextChunk> = (0..words.len())
        .step_by(config.stride())
        .map(|start| {
            let end = (start + config.chunk_size).min(words.len());
            TextChunk::new(words[start..end].join(" "), start, end)
        })
        .collect();

    debug!(
        num_words = words.len(),
        num_chunks = chunks.len(),
        chunk_size = config.chunk_size,
        overlap = config.overlap,
        "Chunked text"
    );

    chunks
}

impl ChunkConfig {
    /// Chunks `text` with this (already validated) configuration.
    pub fn split(&self, text: &str) -> Result<Vec<TextChunk>, ConfigError> {
        self.validate()?;
        Ok(chunk_with(text, self))
    }
}
