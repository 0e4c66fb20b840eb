//! Environment-backed configuration.
//!
//! Every setting has a reference default. Override with `QUALITY_*` environment
//! variables, then call [`Config::validate`] once at startup.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::anchors::{AnchorSet, placeholder_anchors};
use crate::chunker::ChunkConfig;
use crate::constants::{DEFAULT_DENSITY_SATURATION, DEFAULT_EMBEDDING_DIM, REFERENCE_DOMAINS};
use crate::scoring::{CoherenceMode, PillarWeights, QualityScorer, ScoringParams};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `QUALITY_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Embedding dimension shared by anchors and inputs. Default: `384`.
    pub embedding_dim: usize,

    /// JSON anchor file. When unset, placeholder anchors are generated.
    pub anchors_path: Option<PathBuf>,

    /// Chunk window. Default: `256` words with `32` words overlap.
    pub chunking: ChunkConfig,

    /// Pillar weights. Default: `0.35 / 0.35 / 0.20 / 0.10`.
    pub weights: PillarWeights,

    /// Entity density that maps to a full entity pillar. Default: `0.05`.
    pub density_saturation: f64,

    /// Coherence aggregation. Default: mean-to-centroid.
    pub coherence: CoherenceMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            anchors_path: None,
            chunking: ChunkConfig::default(),
            weights: PillarWeights::default(),
            density_saturation: DEFAULT_DENSITY_SATURATION,
            coherence: CoherenceMode::default(),
        }
    }
}

impl Config {
    const ENV_EMBEDDING_DIM: &'static str = "QUALITY_EMBEDDING_DIM";
    const ENV_ANCHORS_PATH: &'static str = "QUALITY_ANCHORS_PATH";
    const ENV_CHUNK_SIZE: &'static str = "QUALITY_CHUNK_SIZE";
    const ENV_CHUNK_OVERLAP: &'static str = "QUALITY_CHUNK_OVERLAP";
    const ENV_WEIGHT_DOMAIN: &'static str = "QUALITY_WEIGHT_DOMAIN";
    const ENV_WEIGHT_COHERENCE: &'static str = "QUALITY_WEIGHT_COHERENCE";
    const ENV_WEIGHT_ENTITY: &'static str = "QUALITY_WEIGHT_ENTITY";
    const ENV_WEIGHT_NOVELTY: &'static str = "QUALITY_WEIGHT_NOVELTY";
    const ENV_DENSITY_SATURATION: &'static str = "QUALITY_DENSITY_SATURATION";
    const ENV_COHERENCE_MODE: &'static str = "QUALITY_COHERENCE_MODE";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Malformed values are errors rather than silently replaced by defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embedding_dim =
            Self::parse_usize_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?;
        let anchors_path = Self::parse_optional_path_from_env(Self::ENV_ANCHORS_PATH);
        let chunking = ChunkConfig {
            chunk_size: Self::parse_usize_from_env(
                Self::ENV_CHUNK_SIZE,
                defaults.chunking.chunk_size,
            )?,
            overlap: Self::parse_usize_from_env(
                Self::ENV_CHUNK_OVERLAP,
                defaults.chunking.overlap,
            )?,
        };
        let weights = PillarWeights {
            domain_relevance: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_DOMAIN,
                defaults.weights.domain_relevance,
            )?,
            semantic_coherence: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_COHERENCE,
                defaults.weights.semantic_coherence,
            )?,
            entity_density: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_ENTITY,
                defaults.weights.entity_density,
            )?,
            novelty: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_NOVELTY,
                defaults.weights.novelty,
            )?,
        };
        let density_saturation = Self::parse_f64_from_env(
            Self::ENV_DENSITY_SATURATION,
            defaults.density_saturation,
        )?;
        let coherence = match env::var(Self::ENV_COHERENCE_MODE) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.coherence,
        };

        Ok(Self {
            embedding_dim,
            anchors_path,
            chunking,
            weights,
            density_saturation,
            coherence,
        })
    }

    /// Validates every invariant the engine relies on (does not read anchors).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidDimension {
                value: self.embedding_dim,
            });
        }

        self.chunking.validate()?;
        self.scoring_params().validate()?;

        if let Some(ref path) = self.anchors_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams {
            weights: self.weights,
            density_saturation: self.density_saturation,
            coherence: self.coherence,
        }
    }

    /// Loads the configured anchor file, or placeholder anchors when none is set.
    pub fn load_anchors(&self) -> Result<AnchorSet, ConfigError> {
        match &self.anchors_path {
            Some(path) => {
                info!(path = %path.display(), "Loading anchors from file");
                AnchorSet::from_json_file(path, self.embedding_dim)
            }
            None => {
                warn!(
                    "No {} configured, using placeholder anchors",
                    Self::ENV_ANCHORS_PATH
                );
                placeholder_anchors(REFERENCE_DOMAINS, self.embedding_dim)
            }
        }
    }

    /// Validates, loads anchors and builds a scorer.
    pub fn build_scorer(&self) -> Result<QualityScorer, ConfigError> {
        self.validate()?;
        let anchors = Arc::new(self.load_anchors()?);
        QualityScorer::new(anchors, self.scoring_params())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::ParseInt {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::ParseFloat {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }
}
