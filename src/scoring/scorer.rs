use std::sync::Arc;

use tracing::{debug, info};

use crate::anchors::AnchorSet;
use crate::config::ConfigError;
use crate::corpus::CorpusMean;

use super::error::ScoringError;
use super::pillars::{
    dominant_domain, entity_density_score, novelty, semantic_coherence, similarity_to_score,
};
use super::types::{PillarWeights, ScoreBreakdown, ScoreInput, ScoreReport, ScoringParams};

/// Scores submissions against a shared, immutable anchor set.
///
/// Holds no mutable state, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    anchors: Arc<AnchorSet>,
    params: ScoringParams,
}

impl QualityScorer {
    pub fn new(anchors: Arc<AnchorSet>, params: ScoringParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { anchors, params })
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Embedding dimension every input must match.
    pub fn dimension(&self) -> usize {
        self.anchors.dimension()
    }

    pub fn score(&self, input: &ScoreInput<'_>) -> Result<ScoreReport, ScoringError> {
        score_with(&self.anchors, &self.params, input)
    }
}

/// Scores one submission with reference saturation and coherence settings.
pub fn score(
    whole_text: &[f64],
    chunks: &[Vec<f64>],
    entity_density: f64,
    corpus_mean: &CorpusMean,
    anchors: &AnchorSet,
    weights: &PillarWeights,
) -> Result<ScoreReport, ScoringError> {
    let params = ScoringParams::with_weights(*weights);
    params.validate()?;

    let input = ScoreInput {
        whole_text,
        chunks,
        entity_density,
        corpus_mean,
    };
    score_with(anchors, &params, &input)
}

/// Scores one submission. `params` must already be validated.
pub fn score_with(
    anchors: &AnchorSet,
    params: &ScoringParams,
    input: &ScoreInput<'_>,
) -> Result<ScoreReport, ScoringError> {
    check_inputs(anchors.dimension(), input)?;

    debug!(
        num_chunks = input.chunks.len(),
        entity_density = input.entity_density,
        corpus_count = input.corpus_mean.count,
        "Scoring submission"
    );

    let (domain, best_similarity) = dominant_domain(input.whole_text, anchors)?;
    let domain_relevance = similarity_to_score(best_similarity);
    let semantic_coherence = semantic_coherence(input.chunks, params.coherence)?;
    let entity_density = entity_density_score(input.entity_density, params.density_saturation);
    let novelty = novelty(input.whole_text, input.corpus_mean)?;

    debug!(
        dominant_domain = domain,
        domain_relevance, semantic_coherence, entity_density, novelty, "Pillar scores"
    );

    let breakdown = ScoreBreakdown::from_pillars(
        &params.weights,
        domain_relevance,
        semantic_coherence,
        entity_density,
        novelty,
        domain.to_string(),
    );
    let updated_corpus_mean = input.corpus_mean.with_sample(input.whole_text)?;

    info!(
        final_score = breakdown.final_score,
        dominant_domain = %breakdown.dominant_domain,
        "Submission scored"
    );

    Ok(ScoreReport {
        breakdown,
        updated_corpus_mean,
    })
}

fn check_inputs(expected: usize, input: &ScoreInput<'_>) -> Result<(), ScoringError> {
    check_shape(expected, input)?;

    let non_finite = |v: &[f64]| v.iter().any(|x| !x.is_finite());
    if non_finite(input.whole_text) {
        return Err(ScoringError::NonFinite {
            field: "whole_text".into(),
        });
    }
    if let Some(index) = input.chunks.iter().position(|c| non_finite(c)) {
        return Err(ScoringError::NonFinite {
            field: format!("chunks[{index}]"),
        });
    }
    if non_finite(&input.corpus_mean.mean) {
        return Err(ScoringError::NonFinite {
            field: "corpus_mean".into(),
        });
    }

    Ok(())
}

fn check_shape(expected: usize, input: &ScoreInput<'_>) -> Result<(), ScoringError> {
    let mismatch = |field: String, actual: usize| ScoringError::DimensionMismatch {
        field,
        expected,
        actual,
    };

    if input.whole_text.len() != expected {
        return Err(mismatch("whole_text".into(), input.whole_text.len()));
    }

    if let Some((index, chunk)) = input
        .chunks
        .iter()
        .enumerate()
        .find(|(_, c)| c.len() != expected)
    {
        return Err(mismatch(format!("chunks[{index}]"), chunk.len()));
    }

    if let Some(dim) = input.corpus_mean.dimension()
        && dim != expected
    {
        return Err(mismatch("corpus_mean".into(), dim));
    }

    Ok(())
}
