use thiserror::Error;

use crate::config::ConfigError;
use crate::constants::DimValidationError;
use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("embedder does not match anchor set: {0}")]
    Dimension(#[from] DimValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
