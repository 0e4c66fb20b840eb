use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_DENSITY_SATURATION, DEFAULT_WEIGHT_COHERENCE, DEFAULT_WEIGHT_DOMAIN,
    DEFAULT_WEIGHT_ENTITY, DEFAULT_WEIGHT_NOVELTY, MAX_SCORE, WEIGHT_SUM_EPSILON,
};
use crate::corpus::CorpusMean;

/// Relative weight of each pillar in the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub domain_relevance: f64,
    pub semantic_coherence: f64,
    pub entity_density: f64,
    pub novelty: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            domain_relevance: DEFAULT_WEIGHT_DOMAIN,
            semantic_coherence: DEFAULT_WEIGHT_COHERENCE,
            entity_density: DEFAULT_WEIGHT_ENTITY,
            novelty: DEFAULT_WEIGHT_NOVELTY,
        }
    }
}

impl PillarWeights {
    /// Creates validated weights.
    pub fn new(
        domain_relevance: f64,
        semantic_coherence: f64,
        entity_density: f64,
        novelty: f64,
    ) -> Result<Self, ConfigError> {
        let weights = Self {
            domain_relevance,
            semantic_coherence,
            entity_density,
            novelty,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Every weight must be finite and non-negative, and they must sum to 1.0
    /// within [`WEIGHT_SUM_EPSILON`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (pillar, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { pillar, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.domain_relevance + self.semantic_coherence + self.entity_density + self.novelty
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("domain_relevance", self.domain_relevance),
            ("semantic_coherence", self.semantic_coherence),
            ("entity_density", self.entity_density),
            ("novelty", self.novelty),
        ]
    }
}

/// How chunk embeddings are combined into the coherence signal.
///
/// The two modes agree on ranking for most texts but not on absolute values, so
/// scores are only comparable within one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceMode {
    /// Mean cosine of every chunk to the mean chunk vector.
    #[default]
    MeanToCentroid,
    /// Mean cosine between position-adjacent chunks.
    AdjacentPairs,
}

impl FromStr for CoherenceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centroid" | "mean_to_centroid" => Ok(Self::MeanToCentroid),
            "adjacent" | "adjacent_pairs" => Ok(Self::AdjacentPairs),
            _ => Err(ConfigError::InvalidCoherenceMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CoherenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MeanToCentroid => write!(f, "centroid"),
            Self::AdjacentPairs => write!(f, "adjacent"),
        }
    }
}

/// Everything besides anchors that shapes a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    pub weights: PillarWeights,
    /// Entity density mapped to a full entity pillar.
    pub density_saturation: f64,
    pub coherence: CoherenceMode,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            weights: PillarWeights::default(),
            density_saturation: DEFAULT_DENSITY_SATURATION,
            coherence: CoherenceMode::default(),
        }
    }
}

impl ScoringParams {
    pub fn with_weights(weights: PillarWeights) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if !self.density_saturation.is_finite() || self.density_saturation <= 0.0 {
            return Err(ConfigError::InvalidSaturation {
                value: self.density_saturation,
            });
        }
        Ok(())
    }
}

/// Inputs to one scoring call.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    /// Embedding of the full submission.
    pub whole_text: &'a [f64],
    /// Per-chunk embeddings in source order.
    pub chunks: &'a [Vec<f64>],
    /// Entities per word from the external estimator.
    pub entity_density: f64,
    /// Corpus mean before this submission.
    pub corpus_mean: &'a CorpusMean,
}

/// Per-pillar scores and the combined score for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub domain_relevance: f64,
    pub semantic_coherence: f64,
    pub entity_density: f64,
    pub novelty: f64,
    /// Unrounded weighted sum, for ranking and aggregation.
    pub final_score: f64,
    /// `final_score` rounded to the nearest integer, for display.
    pub final_score_rounded: u8,
    /// Label of the anchor most similar to the whole text.
    pub dominant_domain: String,
}

impl ScoreBreakdown {
    pub(crate) fn from_pillars(
        weights: &PillarWeights,
        domain_relevance: f64,
        semantic_coherence: f64,
        entity_density: f64,
        novelty: f64,
        dominant_domain: String,
    ) -> Self {
        let final_score = (weights.domain_relevance * domain_relevance
            + weights.semantic_coherence * semantic_coherence
            + weights.entity_density * entity_density
            + weights.novelty * novelty)
            .clamp(0.0, MAX_SCORE);

        Self {
            domain_relevance,
            semantic_coherence,
            entity_density,
            novelty,
            final_score,
            final_score_rounded: final_score.round() as u8,
            dominant_domain,
        }
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}: domain {:.1}, coherence {:.1}, entity {:.1}, novelty {:.1})",
            self.final_score_rounded,
            self.dominant_domain,
            self.domain_relevance,
            self.semantic_coherence,
            self.entity_density,
            self.novelty
        )
    }
}

/// Output of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub breakdown: ScoreBreakdown,
    /// Corpus mean with this submission folded in; the caller persists it.
    pub updated_corpus_mean: CorpusMean,
}
