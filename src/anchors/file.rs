//! JSON anchor files.
//!
//! Anchors are stored as a list rather than an object so a repeated label is
//! reported instead of silently overwriting the earlier entry:
//!
//! ```json
//! { "anchors": [ { "label": "medical", "centroid": [0.01, -0.2, ...] } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::registry::AnchorSet;
use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorDef {
    pub label: String,
    pub centroid: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorFile {
    pub anchors: Vec<AnchorDef>,
}

impl AnchorFile {
    /// Snapshot of a loaded set (centroids are already unit length).
    pub fn from_set(set: &AnchorSet) -> Self {
        Self {
            anchors: set
                .iter()
                .map(|(label, centroid)| AnchorDef {
                    label: label.to_string(),
                    centroid: centroid.to_vec(),
                })
                .collect(),
        }
    }

    fn into_pairs(self) -> impl Iterator<Item = (String, Vec<f64>)> {
        self.anchors.into_iter().map(|def| (def.label, def.centroid))
    }
}

impl AnchorSet {
    /// Parses anchors from JSON, requiring dimension `dim`.
    pub fn from_json_str(json: &str, dim: usize) -> Result<Self, ConfigError> {
        let file: AnchorFile =
            serde_json::from_str(json).map_err(|source| ConfigError::AnchorFileParse {
                path: "<inline>".into(),
                source,
            })?;
        Self::load_with_dim(file.into_pairs(), dim)
    }

    /// Reads anchors from a JSON file, requiring dimension `dim`.
    pub fn from_json_file(path: &Path, dim: usize) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::AnchorFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: AnchorFile =
            serde_json::from_str(&raw).map_err(|source| ConfigError::AnchorFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::load_with_dim(file.into_pairs(), dim)
    }
}
