//! Running corpus-mean state used by the novelty pillar.
//!
//! The scorer never owns this state. Callers pass a [`CorpusMean`] in and get
//! the updated mean back, then persist it however they like. Hosts scoring from
//! several threads can wrap it in a [`SharedCorpus`], which serializes the
//! read-score-commit cycle behind one lock.

pub mod mean;
pub mod shared;


pub use mean::CorpusMean;
pub use shared::SharedCorpus;
