use super::*;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::anchors::{AnchorFile, placeholder_anchors};

const ALL_VARS: [&str; 10] = [
    "QUALITY_EMBEDDING_DIM",
    "QUALITY_ANCHORS_PATH",
    "QUALITY_CHUNK_SIZE",
    "QUALITY_CHUNK_OVERLAP",
    "QUALITY_WEIGHT_DOMAIN",
    "QUALITY_WEIGHT_COHERENCE",
    "QUALITY_WEIGHT_ENTITY",
    "QUALITY_WEIGHT_NOVELTY",
    "QUALITY_DENSITY_SATURATION",
    "QUALITY_COHERENCE_MODE",
];

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_quality_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for key in ALL_VARS {
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.embedding_dim, 384);
    assert!(config.anchors_path.is_none());
    assert_eq!(config.chunking.chunk_size, 256);
    assert_eq!(config.chunking.overlap, 32);
    assert_eq!(config.weights, PillarWeights::default());
    assert_eq!(config.density_saturation, 0.05);
    assert_eq!(config.coherence, CoherenceMode::MeanToCentroid);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_quality_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_quality_env();

    with_env_vars(
        &[
            ("QUALITY_EMBEDDING_DIM", "768"),
            ("QUALITY_CHUNK_SIZE", " 128 "),
            ("QUALITY_CHUNK_OVERLAP", "16"),
            ("QUALITY_WEIGHT_DOMAIN", "0.4"),
            ("QUALITY_WEIGHT_COHERENCE", "0.3"),
            ("QUALITY_WEIGHT_ENTITY", "0.2"),
            ("QUALITY_WEIGHT_NOVELTY", "0.1"),
            ("QUALITY_DENSITY_SATURATION", "0.08"),
            ("QUALITY_COHERENCE_MODE", "adjacent"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.embedding_dim, 768);
            assert_eq!(config.chunking.chunk_size, 128);
            assert_eq!(config.chunking.overlap, 16);
            assert_eq!(config.weights.domain_relevance, 0.4);
            assert_eq!(config.weights.semantic_coherence, 0.3);
            assert_eq!(config.density_saturation, 0.08);
            assert_eq!(config.coherence, CoherenceMode::AdjacentPairs);
            assert!(config.validate().is_ok());
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_number() {
    clear_quality_env();

    with_env_vars(&[("QUALITY_CHUNK_SIZE", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ParseInt {
                name: "QUALITY_CHUNK_SIZE",
                ..
            }
        ));
    });

    with_env_vars(&[("QUALITY_WEIGHT_NOVELTY", "0.1x")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseFloat { .. }));
        assert!(err.to_string().contains("QUALITY_WEIGHT_NOVELTY"));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_coherence_mode() {
    clear_quality_env();

    with_env_vars(&[("QUALITY_COHERENCE_MODE", "pairwise")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidCoherenceMode { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_empty_anchor_path_is_none() {
    clear_quality_env();

    with_env_vars(&[("QUALITY_ANCHORS_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.anchors_path.is_none());
    });
}

#[test]
fn test_validate_rejects_bad_weights() {
    let config = Config {
        weights: PillarWeights {
            domain_relevance: 0.5,
            semantic_coherence: 0.5,
            entity_density: 0.5,
            novelty: 0.1,
        },
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights { .. })
    ));
}

#[test]
fn test_validate_rejects_bad_chunking() {
    let config = Config {
        chunking: ChunkConfig {
            chunk_size: 32,
            overlap: 32,
        },
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidChunking {
            chunk_size: 32,
            overlap: 32
        })
    ));
}

#[test]
fn test_validate_rejects_zero_dimension() {
    let config = Config {
        embedding_dim: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDimension { value: 0 })
    ));
}

#[test]
fn test_validate_missing_anchor_file() {
    let config = Config {
        anchors_path: Some(PathBuf::from("/nonexistent/anchors.json")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_anchor_path_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        anchors_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));
}

#[test]
fn test_build_scorer_with_placeholder_anchors() {
    let scorer = Config::default().build_scorer().unwrap();
    assert_eq!(scorer.dimension(), 384);
    assert_eq!(scorer.anchors().len(), REFERENCE_DOMAINS.len());
}

#[test]
fn test_build_scorer_from_anchor_file() {
    let set = placeholder_anchors(["finance", "legal"], 32).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        serde_json::to_string(&AnchorFile::from_set(&set))
            .unwrap()
            .as_bytes(),
    )
    .unwrap();

    let config = Config {
        embedding_dim: 32,
        anchors_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let scorer = config.build_scorer().unwrap();
    assert!(scorer.anchors().contains("finance"));
    assert_eq!(scorer.dimension(), 32);

    let wrong_dim = Config {
        embedding_dim: 16,
        ..config
    };
    assert!(matches!(
        wrong_dim.build_scorer(),
        Err(ConfigError::AnchorDimension { .. })
    ));
}

#[test]
fn test_error_display() {
    let err = ConfigError::InvalidChunking {
        chunk_size: 10,
        overlap: 12,
    };
    assert!(err.to_string().contains("12"));
    assert!(err.to_string().contains("10"));

    let err = ConfigError::DuplicateAnchor {
        label: "spam".into(),
    };
    assert_eq!(err.to_string(), "duplicate anchor label: spam");
}
