//! Composite quality scoring.
//!
//! A submission is scored on four independent pillars, each in `0..=100`:
//!
//! | Pillar | Signal | Mapping |
//! |--------|--------|---------|
//! | Domain relevance | best cosine between whole-text embedding and any anchor | `(s + 1) / 2 * 100` |
//! | Semantic coherence | mean cosine of chunks to their centroid (or to their neighbour) | `(s + 1) / 2 * 100`, one chunk = 100 |
//! | Entity density | precomputed entities-per-word ratio | linear, saturating at [`DEFAULT_DENSITY_SATURATION`](crate::constants::DEFAULT_DENSITY_SATURATION) |
//! | Novelty | cosine to the running corpus mean | `100 * (1 - max(0, s))` |
//!
//! The final score is the [`PillarWeights`]-weighted sum, exposed both unrounded
//! and rounded to the nearest integer.
//!
//! # Corpus State
//!
//! Novelty needs the mean of previously scored submissions. The scorer takes it
//! as input and hands back the updated mean in [`ScoreReport`]; persisting it is
//! the caller's job (see [`crate::corpus::SharedCorpus`]).

pub mod error;
pub mod pillars;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use pillars::similarity_to_score;
pub use scorer::{QualityScorer, score, score_with};
pub use types::{
    CoherenceMode, PillarWeights, ScoreBreakdown, ScoreInput, ScoreReport, ScoringParams,
};
