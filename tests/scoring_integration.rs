//! Integration tests for the public scoring API.

mod common;

use std::sync::Arc;

use common::fixtures::{CorpusBuilder, DIM, anchor_vector, reference_anchors, seeded_embedding};
use content_quality::{
    AnchorSet, ConfigError, CorpusMean, PillarWeights, QualityScorer, ScoreInput, ScoringError,
    ScoringParams, chunk, chunk_strings, cosine_similarity, load_anchors, normalize_vector, score,
};

#[test]
fn test_reference_submission() {
    let anchors = reference_anchors();
    let medical = anchor_vector(&anchors, "medical");
    let spam = anchor_vector(&anchors, "spam");

    let text = "patient reports mild fever and cough";
    let chunks = chunk_strings(text, 256, 32).unwrap();
    assert_eq!(chunks, vec![text.to_string()]);

    let report = score(
        &medical,
        &[medical.clone()],
        0.04,
        &CorpusBuilder::new().sample(spam.clone()).build(),
        &anchors,
        &PillarWeights::new(0.35, 0.35, 0.20, 0.10).unwrap(),
    )
    .unwrap();
    let b = &report.breakdown;

    assert_eq!(b.dominant_domain, "medical");
    assert!((b.domain_relevance - 100.0).abs() < 1e-9);
    assert_eq!(b.semantic_coherence, 100.0);
    assert!((b.entity_density - 80.0).abs() < 1e-9);
    assert!(b.novelty > 80.0);

    let weighted = 0.35 * b.domain_relevance
        + 0.35 * b.semantic_coherence
        + 0.20 * b.entity_density
        + 0.10 * b.novelty;
    assert!((b.final_score - weighted).abs() < 1e-9);
    assert!(b.final_score > 94.0 && b.final_score <= 96.0);
}

#[test]
fn test_every_anchor_dominates_itself() {
    let anchors = reference_anchors();
    for (label, centroid) in anchors.iter() {
        let report = score(
            centroid,
            &[],
            0.0,
            &CorpusMean::empty(),
            &anchors,
            &PillarWeights::default(),
        )
        .unwrap();
        assert_eq!(report.breakdown.dominant_domain, label);
    }
}

#[test]
fn test_novelty_decays_as_corpus_converges() {
    let anchors = reference_anchors();
    let tech = anchor_vector(&anchors, "tech");
    let scorer = QualityScorer::new(Arc::new(anchors), ScoringParams::default()).unwrap();

    let mut corpus = CorpusBuilder::new()
        .repeated(normalize_vector(&seeded_embedding(7)), 3)
        .build();
    let mut previous = f64::INFINITY;

    for _ in 0..5 {
        let report = scorer
            .score(&ScoreInput {
                whole_text: &tech,
                chunks: &[],
                entity_density: 0.0,
                corpus_mean: &corpus,
            })
            .unwrap();
        assert!(report.breakdown.novelty <= previous);
        previous = report.breakdown.novelty;
        corpus = report.updated_corpus_mean;
    }

    assert_eq!(corpus.count, 8);
    let drift = cosine_similarity(&corpus.mean, &tech).unwrap();
    assert!(drift > 0.5, "corpus mean should lean toward tech, got {drift}");
}

#[test]
fn test_scores_stay_in_range() {
    let anchors = reference_anchors();
    for seed in 0..25 {
        let whole = seeded_embedding(seed);
        let chunks = vec![
            seeded_embedding(seed + 1000),
            seeded_embedding(seed + 2000),
            seeded_embedding(seed + 3000),
        ];
        let corpus = CorpusBuilder::new().sample(seeded_embedding(seed + 99)).build();
        let report = score(
            &whole,
            &chunks,
            seed as f64 / 100.0,
            &corpus,
            &anchors,
            &PillarWeights::default(),
        )
        .unwrap();
        let b = report.breakdown;
        for value in [
            b.domain_relevance,
            b.semantic_coherence,
            b.entity_density,
            b.novelty,
            b.final_score,
        ] {
            assert!((0.0..=100.0).contains(&value), "out of range: {value}");
        }
        assert!(b.final_score_rounded <= 100);
    }
}

#[test]
fn test_dimension_mismatch_against_anchor_set() {
    let anchors = reference_anchors();
    let err = score(
        &vec![0.5; DIM - 1],
        &[],
        0.0,
        &CorpusMean::empty(),
        &anchors,
        &PillarWeights::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::DimensionMismatch {
            expected: DIM,
            actual,
            ..
        } if actual == DIM - 1
    ));
}

#[test]
fn test_swapping_anchor_sets_needs_no_code_change() {
    let placeholder = reference_anchors();
    let corpus_derived: AnchorSet = load_anchors(
        placeholder
            .iter()
            .map(|(label, _)| (label.to_string(), seeded_embedding(label.len() as u64))),
    )
    .unwrap();

    let whole = seeded_embedding(6);
    for anchors in [&placeholder, &corpus_derived] {
        let report = score(
            &whole,
            &[],
            0.0,
            &CorpusMean::empty(),
            anchors,
            &PillarWeights::default(),
        );
        assert!(report.is_ok());
    }
}

#[test]
fn test_configuration_errors() {
    assert!(matches!(
        chunk("one two three", 3, 3),
        Err(ConfigError::InvalidChunking { .. })
    ));
    assert!(matches!(
        load_anchors([("a", vec![1.0]), ("a", vec![2.0])]),
        Err(ConfigError::DuplicateAnchor { .. })
    ));
    assert!(matches!(
        load_anchors([("a", vec![1.0]), ("b", vec![1.0, 2.0])]),
        Err(ConfigError::AnchorDimension { .. })
    ));
    assert!(matches!(
        PillarWeights::new(0.35, 0.35, 0.20, 0.20),
        Err(ConfigError::InvalidWeights { .. })
    ));
}
