//! Deterministic placeholder centroids for development.
//!
//! Each component is drawn from a BLAKE3 extendable-output stream keyed by the
//! label, so the same label and dimension always produce the same vector on every
//! platform. These stand in until real corpus centroids are available.

use super::registry::AnchorSet;
use crate::config::ConfigError;
use crate::vector::normalize_vector;

const PLACEHOLDER_CONTEXT: &[u8] = b"content-quality placeholder anchor v1|";

/// Unit-length pseudo-random vector for `label`.
pub fn placeholder_centroid(label: &str, dim: usize) -> Vec<f64> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(PLACEHOLDER_CONTEXT);
    hasher.update(label.as_bytes());
    let mut reader = hasher.finalize_xof();

    let mut buf = [0u8; 8];
    let raw: Vec<f64> = (0..dim)
        .map(|_| {
            reader.fill(&mut buf);
            let unit = u64::from_le_bytes(buf) as f64 / u64::MAX as f64;
            unit * 2.0 - 1.0
        })
        .collect();

    normalize_vector(&raw)
}

/// Builds an [`AnchorSet`] of placeholder centroids for `labels`.
pub fn placeholder_anchors<'a, I>(labels: I, dim: usize) -> Result<AnchorSet, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    AnchorSet::load_with_dim(
        labels
            .into_iter()
            .map(|label| (label, placeholder_centroid(label, dim))),
        dim,
    )
}
