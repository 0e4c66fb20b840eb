//! Content quality scoring library (used by the CLI and integration tests).
//!
//! Scores a text submission from its embeddings on four pillars (domain
//! relevance, semantic coherence, entity density, novelty) and combines them into
//! a weighted 0-100 score. Embeddings come from an external model; this crate
//! only does the vector math, chunking and aggregation.
//!
//! # Public API Surface
//!
//! ## Core Operations
//! - [`chunk`], [`chunk_strings`] - Word-window chunking
//! - [`score`], [`QualityScorer`] - Pillar scoring
//! - [`AnchorSet::load`] - Domain anchor registry
//!
//! ## Vector Math
//! - [`cosine_similarity`], [`euclidean_distance`], [`mean_vector`], [`variance`],
//!   [`normalize_vector`]
//!
//! ## State & Seams
//! - [`CorpusMean`], [`SharedCorpus`] - Caller-owned novelty state
//! - [`Embedder`], [`DensityEstimator`] - External collaborators
//! - [`QualityPipeline`] - Chunk, embed and score in one call
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `QUALITY_*` environment configuration
//! - [`validate_embedding_dim`] - Dimension validation
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```
//! use content_quality::{AnchorSet, CorpusMean, PillarWeights, score};
//!
//! let anchors = AnchorSet::load([
//!     ("legal", vec![0.0, 1.0, 0.0]),
//!     ("medical", vec![1.0, 0.0, 0.0]),
//! ])?;
//! let whole = vec![0.9, 0.1, 0.0];
//!
//! let report = score(
//!     &whole,
//!     &[whole.clone()],
//!     0.04,
//!     &CorpusMean::empty(),
//!     &anchors,
//!     &PillarWeights::default(),
//! )?;
//! assert_eq!(report.breakdown.dominant_domain, "medical");
//! assert_eq!(report.breakdown.semantic_coherence, 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod anchors;
pub mod chunker;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod lexical;
pub mod pipeline;
pub mod scoring;
pub mod vector;

pub use anchors::{AnchorDef, AnchorFile, AnchorSet, placeholder_anchors, placeholder_centroid};
pub use chunker::{ChunkConfig, TextChunk, chunk, chunk_strings};
pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};
pub use corpus::{CorpusMean, SharedCorpus};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{Embedder, EmbeddingError};
pub use lexical::{DensityEstimator, LexicalDensityEstimator};
pub use pipeline::{Evaluation, PipelineError, PreparedSubmission, QualityPipeline};
pub use scoring::{
    CoherenceMode, PillarWeights, QualityScorer, ScoreBreakdown, ScoreInput, ScoreReport,
    ScoringError, ScoringParams, score, score_with, similarity_to_score,
};
pub use vector::{
    VectorError, cosine_similarity, euclidean_distance, magnitude, mean_vector,
    normalize_vector, variance,
};

/// Alias of [`AnchorSet::load`].
pub fn load_anchors<I, L>(mapping: I) -> Result<AnchorSet, ConfigError>
where
    I: IntoIterator<Item = (L, Vec<f64>)>,
    L: Into<String>,
{
    AnchorSet::load(mapping)
}
