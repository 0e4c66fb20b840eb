//! Cross-cutting, shared constants.
//!
//! Reference values for embedding dimension, pillar weights, chunking and density
//! saturation. Runtime overrides flow through [`crate::config::Config`].
//!
//! # Dimension Invariants
//!
//! Every embedding the engine consumes must share one dimension for the process
//! lifetime. The anchor set fixes that dimension at load time:
//!
//! 1. Use [`validate_embedding_dim`] at module boundaries to catch mismatches early
//! 2. [`DEFAULT_EMBEDDING_DIM`] remains the default when nothing is configured

/// Output dimension of the reference sentence-embedding model (MiniLM family).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

pub const DEFAULT_WEIGHT_DOMAIN: f64 = 0.35;
pub const DEFAULT_WEIGHT_COHERENCE: f64 = 0.35;
pub const DEFAULT_WEIGHT_ENTITY: f64 = 0.20;
pub const DEFAULT_WEIGHT_NOVELTY: f64 = 0.10;

/// Tolerance for pillar weights summing to `1.0`.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Two anchor similarities closer than this are treated as a tie.
pub const TIE_EPSILON: f64 = 1e-9;

/// Entity density (entities per word) at which the entity pillar saturates at 100.
pub const DEFAULT_DENSITY_SATURATION: f64 = 0.05;

/// Default chunk length in words.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Default number of words shared by consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 32;

/// Upper bound of every pillar and of the final score.
pub const MAX_SCORE: f64 = 100.0;

/// Reference domain labels used for placeholder anchors.
pub const REFERENCE_DOMAINS: [&str; 5] = ["common", "legal", "medical", "spam", "tech"];

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use content_quality::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
