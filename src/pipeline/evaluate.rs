use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::chunker::{ChunkConfig, TextChunk};
use crate::constants::validate_embedding_dim;
use crate::corpus::{CorpusMean, SharedCorpus};
use crate::embedding::Embedder;
use crate::lexical::DensityEstimator;
use crate::scoring::{QualityScorer, ScoreInput, ScoreReport};

use super::error::PipelineError;

/// A submission after chunking, embedding and density estimation, ready to score.
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    pub chunks: Vec<TextChunk>,
    pub whole_text: Vec<f64>,
    pub chunk_embeddings: Vec<Vec<f64>>,
    pub entity_density: f64,
}

/// Result of [`QualityPipeline::evaluate`].
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub chunks: Vec<TextChunk>,
    pub report: ScoreReport,
}

pub struct QualityPipeline<E, D> {
    scorer: QualityScorer,
    chunking: ChunkConfig,
    embedder: E,
    estimator: D,
}

impl<E, D> std::fmt::Debug for QualityPipeline<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityPipeline")
            .field("scorer", &self.scorer)
            .field("chunking", &self.chunking)
            .finish_non_exhaustive()
    }
}

impl<E: Embedder, D: DensityEstimator> QualityPipeline<E, D> {
    /// Fails if the chunking is invalid or the embedder's dimension differs from
    /// the scorer's anchor dimension.
    pub fn new(
        scorer: QualityScorer,
        chunking: ChunkConfig,
        embedder: E,
        estimator: D,
    ) -> Result<Self, PipelineError> {
        chunking.validate()?;
        validate_embedding_dim(embedder.dimension(), scorer.dimension())?;
        Ok(Self {
            scorer,
            chunking,
            embedder,
            estimator,
        })
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    /// Chunks and embeds `text`. This is the expensive half of an evaluation and
    /// touches no corpus state.
    pub fn prepare(&self, text: &str) -> Result<PreparedSubmission, PipelineError> {
        let chunks = self.chunking.split(text)?;

        let chunk_embeddings = chunks
            .par_iter()
            .map(|chunk| self.embedder.embed_checked(&chunk.text))
            .collect::<Result<Vec<_>, _>>()?;

        // a single chunk is the whole text
        let whole_text = match chunk_embeddings.as_slice() {
            [only] => only.clone(),
            _ => self.embedder.embed_checked(text)?,
        };

        let entity_density = self.estimator.estimate(text);

        debug!(
            num_chunks = chunks.len(),
            entity_density, "Prepared submission"
        );

        Ok(PreparedSubmission {
            chunks,
            whole_text,
            chunk_embeddings,
            entity_density,
        })
    }

    /// Scores a prepared submission against `corpus_mean`.
    pub fn score_prepared(
        &self,
        prepared: &PreparedSubmission,
        corpus_mean: &CorpusMean,
    ) -> Result<ScoreReport, PipelineError> {
        let input = ScoreInput {
            whole_text: &prepared.whole_text,
            chunks: &prepared.chunk_embeddings,
            entity_density: prepared.entity_density,
            corpus_mean,
        };
        Ok(self.scorer.score(&input)?)
    }

    /// Full evaluation against caller-held corpus state. The caller persists
    /// `report.updated_corpus_mean`.
    pub fn evaluate(
        &self,
        text: &str,
        corpus_mean: &CorpusMean,
    ) -> Result<Evaluation, PipelineError> {
        let prepared = self.prepare(text)?;
        let report = self.score_prepared(&prepared, corpus_mean)?;
        Ok(Evaluation {
            chunks: prepared.chunks,
            report,
        })
    }

    /// Full evaluation that commits the updated mean into `corpus`.
    ///
    /// Embedding runs before the corpus lock is taken; only scoring and the
    /// commit happen under it.
    pub fn evaluate_shared(
        &self,
        text: &str,
        corpus: &SharedCorpus,
    ) -> Result<Evaluation, PipelineError> {
        let prepared = self.prepare(text)?;
        let report = corpus.update(|current| {
            let report = self.score_prepared(&prepared, current)?;
            let updated = report.updated_corpus_mean.clone();
            Ok::<_, PipelineError>((report, updated))
        })?;
        Ok(Evaluation {
            chunks: prepared.chunks,
            report,
        })
    }
}
