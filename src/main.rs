//! Content quality CLI entrypoint.
//!
//! Reads JSON (or raw text for `chunk`) on stdin and writes JSON to stdout.
//! Logs go to stderr; set `RUST_LOG=content_quality=debug` for pillar detail.

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use serde::Deserialize;

use content_quality::config::Config;
use content_quality::constants::REFERENCE_DOMAINS;
use content_quality::{
    AnchorFile, ChunkConfig, CorpusMean, DensityEstimator, LexicalDensityEstimator, ScoreInput,
    placeholder_anchors,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(
    name = "content-quality",
    about = "Embedding-based content quality scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text from stdin into overlapping word windows
    Chunk {
        /// Words per chunk (default: QUALITY_CHUNK_SIZE or 256)
        #[arg(short, long)]
        size: Option<usize>,

        /// Words shared by consecutive chunks (default: QUALITY_CHUNK_OVERLAP or 32)
        #[arg(short, long)]
        overlap: Option<usize>,
    },

    /// Score a JSON request from stdin
    Score,

    /// Print a placeholder anchor file
    Anchors {
        /// Embedding dimension (default: QUALITY_EMBEDDING_DIM or 384)
        #[arg(short, long)]
        dim: Option<usize>,

        /// Domain labels (default: common, legal, medical, spam, tech)
        #[arg(short, long, value_delimiter = ',')]
        labels: Vec<String>,
    },
}

/// Body of a `score` request.
///
/// `entity_density` may be omitted when `text` is given; it is then estimated
/// lexically from the text.
#[derive(Debug, Deserialize)]
struct ScoreRequest {
    whole_text: Vec<f64>,
    #[serde(default)]
    chunks: Vec<Vec<f64>>,
    entity_density: Option<f64>,
    text: Option<String>,
    #[serde(default)]
    corpus_mean: CorpusMean,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Chunk { size, overlap } => {
            let chunking = ChunkConfig {
                chunk_size: size.unwrap_or(config.chunking.chunk_size),
                overlap: overlap.unwrap_or(config.chunking.overlap),
            };
            let text = read_stdin()?;
            let chunks = chunking.split(&text)?;
            write_json(&chunks)
        }
        Commands::Score => {
            let scorer = config.build_scorer()?;
            let request: ScoreRequest =
                serde_json::from_str(&read_stdin()?).context("invalid score request")?;

            let entity_density = match (request.entity_density, &request.text) {
                (Some(density), _) => density,
                (None, Some(text)) => LexicalDensityEstimator.estimate(text),
                (None, None) => {
                    anyhow::bail!("score request needs either entity_density or text")
                }
            };

            tracing::info!(
                dim = request.whole_text.len(),
                num_chunks = request.chunks.len(),
                "Scoring request"
            );

            let report = scorer.score(&ScoreInput {
                whole_text: &request.whole_text,
                chunks: &request.chunks,
                entity_density,
                corpus_mean: &request.corpus_mean,
            })?;
            write_json(&report)
        }
        Commands::Anchors { dim, labels } => {
            let dim = dim.unwrap_or(config.embedding_dim);
            let set = if labels.is_empty() {
                placeholder_anchors(REFERENCE_DOMAINS, dim)?
            } else {
                placeholder_anchors(labels.iter().map(String::as_str), dim)?
            };
            write_json(&AnchorFile::from_set(&set))
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

fn write_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
