//! Test fixtures for integration tests.

#![allow(dead_code)]

use content_quality::constants::{DEFAULT_EMBEDDING_DIM, REFERENCE_DOMAINS};
use content_quality::{AnchorSet, CorpusMean, placeholder_anchors};

pub const DIM: usize = DEFAULT_EMBEDDING_DIM;

pub fn reference_anchors() -> AnchorSet {
    placeholder_anchors(REFERENCE_DOMAINS, DIM).expect("placeholder anchors are valid")
}

pub fn anchor_vector(set: &AnchorSet, label: &str) -> Vec<f64> {
    set.get(label).expect("anchor exists").to_vec()
}

/// Deterministic vector in `[-1, 1]` for `seed`.
pub fn seeded_embedding(seed: u64) -> Vec<f64> {
    (0..DIM)
        .map(|i| {
            let mixed = (seed.wrapping_mul(31).wrapping_add(i as u64 * 17)) % 1000;
            mixed as f64 / 500.0 - 1.0
        })
        .collect()
}

/// Builder for a corpus mean fixture.
#[derive(Default)]
pub struct CorpusBuilder {
    samples: Vec<Vec<f64>>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(mut self, embedding: Vec<f64>) -> Self {
        self.samples.push(embedding);
        self
    }

    pub fn repeated(mut self, embedding: Vec<f64>, times: usize) -> Self {
        for _ in 0..times {
            self.samples.push(embedding.clone());
        }
        self
    }

    pub fn build(self) -> CorpusMean {
        self.samples
            .iter()
            .fold(CorpusMean::empty(), |acc, s| {
                acc.with_sample(s).expect("fixture samples share a dimension")
            })
    }
}
