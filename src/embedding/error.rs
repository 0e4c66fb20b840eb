use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedder returned {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
