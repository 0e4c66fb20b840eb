use crate::anchors::placeholder_centroid;
use crate::vector::normalize_vector;

use super::embedder::Embedder;
use super::error::EmbeddingError;

/// Deterministic bag-of-words embedder.
///
/// Each lowercase word maps to a fixed pseudo-random unit vector; a text embeds
/// to the normalized sum of its words. Texts sharing vocabulary come out similar,
/// which is enough to exercise coherence and novelty without a model.
#[derive(Debug, Clone)]
pub struct MockEmbedder {
    dimension: usize,
}

impl MockEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Embedder for MockEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        let mut sum = vec![0.0; self.dimension];
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            for (acc, x) in sum
                .iter_mut()
                .zip(placeholder_centroid(&word, self.dimension))
            {
                *acc += x;
            }
        }
        Ok(normalize_vector(&sum))
    }
}
