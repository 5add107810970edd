//! DSR Provider Implementations
//!
//! Implementations of the domain's provider ports: the two similarity
//! scoring strategies (lexical edit-ratio and semantic embedding cosine)
//! and the embedding providers the semantic strategy runs on (local ONNX
//! models via fastembed, plus a deterministic null provider for tests and
//! offline development).

/// Shared provider constants
pub mod constants;
/// Embedding provider implementations
pub mod embedding;
/// Similarity scorer implementations
pub mod similarity;

pub use embedding::NullEmbeddingProvider;
#[cfg(feature = "embedding-fastembed")]
pub use embedding::FastEmbedProvider;
pub use similarity::{LexicalScorer, SemanticScorer, scorer_for};
