use std::sync::Arc;

use super::error::EmbeddingError;

/// External text-to-vector function with a fixed output dimension.
///
/// Implementations must be deterministic for the process lifetime and return
/// vectors of exactly [`Embedder::dimension`] components.
pub trait Embedder: Send + Sync {
    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError>;

    /// Embeds and checks the output length.
    fn embed_checked(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        let embedding = self.embed(text)?;
        if embedding.len() != self.dimension() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension(),
                actual: embedding.len(),
            });
        }
        Ok(embedding)
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        (**self).embed(text)
    }
}
