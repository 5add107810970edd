//! Similarity Scorer Implementations
//!
//! Two interchangeable strategies behind the
//! [`SimilarityScorer`](dsr_domain::ports::providers::SimilarityScorer)
//! port, selected once per comparison run:
//!
//! | Scorer | Description |
//! |--------|-------------|
//! | [`LexicalScorer`] | Character-level edit-similarity ratio, averaged across line pairs |
//! | [`SemanticScorer`] | Embedding cosine similarity over whole bodies |

use std::sync::Arc;

use dsr_domain::error::{Error, Result};
use dsr_domain::ports::providers::{EmbeddingProvider, ScorerKind, SimilarityScorer};

/// Lexical edit-ratio scorer
pub mod lexical;
/// Semantic embedding cosine scorer
pub mod semantic;

pub use lexical::LexicalScorer;
pub use semantic::SemanticScorer;

/// Build the scorer for a run from its kind and an optional embedding
/// provider. The semantic strategy requires a provider; selecting it
/// without one is an invalid configuration.
pub fn scorer_for(
    kind: ScorerKind,
    embedding: Option<Arc<dyn EmbeddingProvider>>,
) -> Result<Arc<dyn SimilarityScorer>> {
    match kind {
        ScorerKind::Lexical => Ok(Arc::new(LexicalScorer::new())),
        ScorerKind::Semantic => {
            let embedding = embedding.ok_or_else(|| {
                Error::invalid_configuration(
                    "the semantic scorer requires an embedding provider",
                )
            })?;
            Ok(Arc::new(SemanticScorer::new(embedding)))
        }
    }
}
