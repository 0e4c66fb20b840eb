use serde::{Deserialize, Serialize};

use crate::vector::{VectorError, VectorResult};

/// Mean embedding of every submission scored so far, plus the sample count.
///
/// `count == 0` (or an empty `mean`) is the "no prior submissions" state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorpusMean {
    pub mean: Vec<f64>,
    pub count: u64,
}

impl CorpusMean {
    /// A corpus with no prior submissions.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(mean: Vec<f64>, count: u64) -> Self {
        Self { mean, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.mean.is_empty()
    }

    /// Dimension of the stored mean, `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.mean.len())
    }

    /// Returns the mean with `sample` folded in as one more submission.
    ///
    /// Uses the incremental form `mean + (x - mean) / (n + 1)`, which stays
    /// accurate for long-running corpora without keeping a running sum.
    pub fn with_sample(&self, sample: &[f64]) -> VectorResult<Self> {
        if self.is_empty() {
            return Ok(Self {
                mean: sample.to_vec(),
                count: 1,
            });
        }

        if sample.len() != self.mean.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.mean.len(),
                actual: sample.len(),
            });
        }

        let count = self.count.saturating_add(1);
        let n = count as f64;
        let mean = self
            .mean
            .iter()
            .zip(sample)
            .map(|(m, x)| m + (x - m) / n)
            .collect();

        Ok(Self { mean, count })
    }
}
