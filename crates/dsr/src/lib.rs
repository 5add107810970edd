//! DSR - Document Structure Reconciliation
//!
//! Facade crate: compares two versions of a coded, hierarchical document
//! and reports, per section, whether it was added, removed, moved,
//! unchanged, or modified, with a severity classification.
//!
//! Wires the provider implementations into the application pipeline and
//! exposes the [`compare`] convenience entry point plus the CLI `run`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use dsr_application::ComparisonService;
use dsr_domain::error::{Error, Result};
use dsr_domain::ports::providers::{EmbeddingProvider, ScorerKind, SimilarityScorer};
use dsr_domain::value_objects::ComparisonReport;

/// Configuration loading
pub mod config;
/// Logging initialization
pub mod logging;
/// Tabular rendering
pub mod render;

pub use config::{AppConfig, ConfigLoader};

/// Compare two document texts with the given strategy and threshold.
///
/// Convenience entry point composing the full pipeline: segment both
/// texts, align the entity lists, aggregate the results. The semantic
/// strategy initializes the default local embedding model.
pub async fn compare(
    old_text: &str,
    new_text: &str,
    scorer_kind: ScorerKind,
    match_threshold: f32,
) -> Result<ComparisonReport> {
    let scorer = build_scorer(scorer_kind, None)?;
    ComparisonService::new(scorer)
        .compare(old_text, new_text, match_threshold)
        .await
}

/// Options for one CLI invocation, resolved from arguments
pub struct RunOptions {
    /// Old document version (plain text file)
    pub old_path: PathBuf,
    /// New document version (plain text file)
    pub new_path: PathBuf,
    /// Scoring strategy override
    pub scorer: Option<String>,
    /// Match threshold override
    pub threshold: Option<f32>,
    /// Configuration file path
    pub config_path: Option<PathBuf>,
    /// Write the full report as JSON to this path
    pub json_out: Option<PathBuf>,
}

/// Run one comparison from the command line.
pub async fn run(options: RunOptions) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &options.config_path {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;

    if let Some(scorer) = &options.scorer {
        config.scorer = scorer.parse()?;
    }
    if let Some(threshold) = options.threshold {
        config.match_threshold = threshold;
    }
    config.validate()?;

    logging::init_logging(&config.logging)?;

    let old_text = read_text(&options.old_path)?;
    let new_text = read_text(&options.new_path)?;

    let scorer = build_scorer(config.scorer, config.embedding_model.as_deref())?;
    info!(strategy = scorer.strategy_name(), "scorer selected");
    let service = ComparisonService::with_bands(scorer, config.bands)?;
    let report = service
        .compare(&old_text, &new_text, config.match_threshold)
        .await?;

    println!("{}", render::render_table(&report.results));
    println!("{}", render::render_table(&report.summaries));

    if let Some(path) = &options.json_out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .map_err(|e| Error::io_with_source(format!("writing {}", path.display()), e))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Read a file as UTF-8 text, rejecting undecodable bytes as malformed
/// input. Text extraction from binary containers stays external; the
/// binary consumes already extracted text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io_with_source(format!("reading {}", path.display()), e))?;
    String::from_utf8(bytes)
        .map_err(|_| Error::malformed_input(format!("{} is not valid UTF-8 text", path.display())))
}

/// Build the scorer for a run, attaching an embedding provider when the
/// semantic strategy needs one.
fn build_scorer(kind: ScorerKind, embedding_model: Option<&str>) -> Result<Arc<dyn SimilarityScorer>> {
    let embedding: Option<Arc<dyn EmbeddingProvider>> = match kind {
        ScorerKind::Lexical => None,
        ScorerKind::Semantic => Some(build_embedding_provider(embedding_model)?),
    };
    dsr_providers::scorer_for(kind, embedding)
}

#[cfg(feature = "embedding-fastembed")]
fn build_embedding_provider(model: Option<&str>) -> Result<Arc<dyn EmbeddingProvider>> {
    use dsr_providers::FastEmbedProvider;

    let provider = match model {
        Some(name) => FastEmbedProvider::with_model_name(name)?,
        None => FastEmbedProvider::new()?,
    };
    Ok(Arc::new(provider))
}

#[cfg(not(feature = "embedding-fastembed"))]
fn build_embedding_provider(_model: Option<&str>) -> Result<Arc<dyn EmbeddingProvider>> {
    Err(Error::invalid_configuration(
        "the semantic scorer requires the embedding-fastembed feature",
    ))
}
