//! Word-window text chunking.
//!
//! Long submissions are split into overlapping windows of whitespace-delimited
//! words so each window fits the embedding model's context. Windows are emitted
//! left to right; coherence scoring compares them by position, so callers must
//! keep that order through embedding.

pub mod splitter;
pub mod types;


pub use splitter::{chunk, chunk_strings};
pub use types::{ChunkConfig, TextChunk};
