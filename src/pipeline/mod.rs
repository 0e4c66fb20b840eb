//! End-to-end evaluation: chunk, embed, estimate density, score.
//!
//! Chunk embeddings are computed on the rayon pool. `par_iter().map().collect()`
//! keeps source order, which coherence scoring relies on.

mod error;
mod evaluate;


pub use error::PipelineError;
pub use evaluate::{Evaluation, PreparedSubmission, QualityPipeline};
