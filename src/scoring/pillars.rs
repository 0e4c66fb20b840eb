//! Pillar computations.
//!
//! Inputs are assumed dimension-checked by the scorer.

use crate::anchors::AnchorSet;
use crate::config::ConfigError;
use crate::constants::{MAX_SCORE, TIE_EPSILON};
use crate::corpus::CorpusMean;
use crate::vector::{VectorResult, cosine_similarity, mean_vector};

use super::error::ScoringError;
use super::types::CoherenceMode;

/// Linear remap of a cosine similarity from `[-1, 1]` to `[0, 100]`.
#[inline]
pub fn similarity_to_score(similarity: f64) -> f64 {
    ((similarity + 1.0) / 2.0 * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Best-matching anchor label and its cosine similarity.
///
/// Anchors are visited in ascending label order and a later anchor only wins
/// when it beats the current best by more than [`TIE_EPSILON`].
pub fn dominant_domain<'a>(
    whole_text: &[f64],
    anchors: &'a AnchorSet,
) -> Result<(&'a str, f64), ScoringError> {
    let mut best: Option<(&str, f64)> = None;

    for (label, centroid) in anchors.iter() {
        let similarity = cosine_similarity(whole_text, centroid)?;
        match best {
            Some((_, top)) if similarity <= top + TIE_EPSILON => {}
            _ => best = Some((label, similarity)),
        }
    }

    best.ok_or(ScoringError::Config(ConfigError::EmptyAnchorSet))
}

/// Coherence pillar. Zero or one chunk is maximally coherent.
pub fn semantic_coherence(chunks: &[Vec<f64>], mode: CoherenceMode) -> VectorResult<f64> {
    if chunks.len() <= 1 {
        return Ok(MAX_SCORE);
    }

    let similarity = match mode {
        CoherenceMode::MeanToCentroid => {
            let centroid = mean_vector(chunks)?;
            let total = chunks
                .iter()
                .map(|c| cosine_similarity(c, &centroid))
                .sum::<VectorResult<f64>>()?;
            total / chunks.len() as f64
        }
        CoherenceMode::AdjacentPairs => {
            let total = chunks
                .windows(2)
                .map(|pair| cosine_similarity(&pair[0], &pair[1]))
                .sum::<VectorResult<f64>>()?;
            total / (chunks.len() - 1) as f64
        }
    };

    Ok(similarity_to_score(similarity))
}

/// Entity pillar: density clamped to `[0, 1]` (NaN counts as 0), then scaled
/// linearly so `saturation` and above map to 100.
pub fn entity_density_score(density: f64, saturation: f64) -> f64 {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    (density / saturation).min(1.0) * MAX_SCORE
}

/// Novelty pillar: `100 * (1 - max(0, cos(whole, corpus_mean)))`.
///
/// With no prior submissions the similarity is taken as 0, so the first
/// submission is fully novel.
pub fn novelty(whole_text: &[f64], corpus_mean: &CorpusMean) -> VectorResult<f64> {
    let similarity = if corpus_mean.is_empty() {
        0.0
    } else {
        cosine_similarity(whole_text, &corpus_mean.mean)?
    };
    Ok(MAX_SCORE * (1.0 - similarity.max(0.0)))
}
