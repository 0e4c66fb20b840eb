use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::ConfigError;
use crate::vector::normalize_vector;

/// Immutable, validated set of domain centroids sharing one dimension.
///
/// Labels iterate in ascending order, which is what makes dominant-domain tie
/// breaking deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSet {
    dimension: usize,
    anchors: BTreeMap<String, Vec<f64>>,
}

impl AnchorSet {
    /// Builds an anchor set, inferring the dimension from the first anchor.
    pub fn load<I, L>(mapping: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        Self::build(mapping, None)
    }

    /// Builds an anchor set whose anchors must all have dimension `dim`.
    pub fn load_with_dim<I, L>(mapping: I, dim: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        if dim == 0 {
            return Err(ConfigError::InvalidDimension { value: dim });
        }
        Self::build(mapping, Some(dim))
    }

    fn build<I, L>(mapping: I, expected: Option<usize>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        let mut dimension = expected;
        let mut anchors = BTreeMap::new();

        for (label, centroid) in mapping {
            let label = label.into();

            let dim = *dimension.get_or_insert(centroid.len());
            if dim == 0 {
                return Err(ConfigError::InvalidDimension { value: 0 });
            }
            if centroid.len() != dim {
                return Err(ConfigError::AnchorDimension {
                    label,
                    expected: dim,
                    actual: centroid.len(),
                });
            }
            if centroid.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteAnchor { label });
            }
            // Pre-scale by the largest component so the norm neither
            // overflows nor underflows.
            let max_abs = centroid.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            if max_abs == 0.0 {
                return Err(ConfigError::ZeroAnchor { label });
            }
            let centroid: Vec<f64> = centroid.iter().map(|v| v / max_abs).collect();
            if anchors.contains_key(&label) {
                return Err(ConfigError::DuplicateAnchor { label });
            }

            debug!(label = %label, dim, "Registered anchor");
            anchors.insert(label, normalize_vector(&centroid));
        }

        let Some(dimension) = dimension.filter(|_| !anchors.is_empty()) else {
            return Err(ConfigError::EmptyAnchorSet);
        };

        info!(
            num_anchors = anchors.len(),
            dimension, "Anchor set loaded"
        );

        Ok(Self { dimension, anchors })
    }

    /// Embedding dimension every scored vector must match.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.anchors.contains_key(label)
    }

    /// Returns the unit-length centroid for `label`.
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.anchors.get(label).map(Vec::as_slice)
    }

    /// Iterates `(label, centroid)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.anchors
            .iter()
            .map(|(label, centroid)| (label.as_str(), centroid.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.anchors.keys().map(String::as_str)
    }
}
