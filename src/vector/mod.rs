//! Dimension-checked vector primitives.
//!
//! Every function here is pure and operates on `f64` slices so scores are
//! reproducible across platforms within normal floating-point tolerance.
//!
//! Degenerate inputs have defined results instead of errors:
//! - zero-magnitude vectors have cosine similarity `0.0` with anything
//! - [`mean_vector`] of no vectors is the empty vector
//! - [`variance`] of no values is `0.0`
//! - [`normalize_vector`] returns a zero vector unchanged

pub mod error;
pub mod math;


pub use error::{VectorError, VectorResult};
pub use math::{
    cosine_similarity, dot, euclidean_distance, magnitude, mean_vector, normalize_vector,
    variance,
};
