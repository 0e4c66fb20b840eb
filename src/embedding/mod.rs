//! Embedding-model seam.
//!
//! The engine never runs a model itself. Hosts implement [`Embedder`] over
//! whatever produces their vectors (an in-process model, a remote service) and
//! hand it to [`crate::pipeline::QualityPipeline`].
//!
//! [`MockEmbedder`] is a deterministic bag-of-words stand-in for tests, available
//! under `cfg(test)` or the `mock` feature.

mod embedder;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;


pub use embedder::Embedder;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
