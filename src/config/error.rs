//! Configuration error types.
//!
//! Every variant is a startup-time failure: invalid weights, chunking parameters
//! or anchor definitions are surfaced to the operator and never recovered.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pillar weights do not sum to 1.0.
    #[error("pillar weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    /// A pillar weight is negative or not finite.
    #[error("invalid weight for pillar '{pillar}': {value}")]
    NegativeWeight { pillar: &'static str, value: f64 },

    /// Chunk window would never advance.
    #[error("invalid chunking: overlap {overlap} must be smaller than chunk size {chunk_size}")]
    InvalidChunking { chunk_size: usize, overlap: usize },

    /// Entity density saturation must be a positive finite number.
    #[error("invalid entity density saturation: {value}")]
    InvalidSaturation { value: f64 },

    /// Embedding dimension must be non-zero.
    #[error("invalid embedding dimension: {value}")]
    InvalidDimension { value: usize },

    /// Unknown coherence mode name.
    #[error("unknown coherence mode '{value}': expected 'centroid' or 'adjacent'")]
    InvalidCoherenceMode { value: String },

    /// Anchor set has no anchors.
    #[error("anchor set is empty")]
    EmptyAnchorSet,

    /// The same label was defined twice.
    #[error("duplicate anchor label: {label}")]
    DuplicateAnchor { label: String },

    /// Anchor vector length disagrees with the anchor set dimension.
    #[error("anchor '{label}' has dimension {actual}, expected {expected}")]
    AnchorDimension {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// Anchor vector cannot be normalized to unit length.
    #[error("anchor '{label}' has zero magnitude")]
    ZeroAnchor { label: String },

    /// Anchor vector contains NaN or infinity.
    #[error("anchor '{label}' contains non-finite values")]
    NonFiniteAnchor { label: String },

    /// Anchor file could not be read.
    #[error("failed to read anchor file {path}: {source}")]
    AnchorFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Anchor file is not valid anchor JSON.
    #[error("failed to parse anchor file {path}: {source}")]
    AnchorFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A float environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    ParseFloat {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    ParseInt {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
