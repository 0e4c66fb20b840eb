use thiserror::Error;

use crate::config::ConfigError;
use crate::vector::VectorError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("dimension mismatch in {field}: expected {expected}, got {actual}")]
    DimensionMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field} contains non-finite values")]
    NonFinite { field: String },

    #[error("invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vector(#[from] VectorError),
}
