//! Entity-density estimation.
//!
//! The entity pillar consumes a ratio of entity-like tokens to words. A real
//! deployment may plug in an NER model through [`DensityEstimator`]; the
//! [`LexicalDensityEstimator`] here is a cheap surface-form heuristic.

mod estimator;


pub use estimator::{DensityEstimator, LexicalDensityEstimator, is_entity_like};
