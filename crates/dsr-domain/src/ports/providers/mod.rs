//! External Provider Ports
//!
//! Ports for the capabilities the reconciliation engine consumes.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SimilarityScorer`] | Scalar resemblance of two text bodies |
//! | [`EmbeddingProvider`] | Text embedding generation services |

/// Embedding provider port
pub mod embedding;
/// Similarity scorer port
pub mod similarity;

pub use embedding::EmbeddingProvider;
pub use similarity::{ScorerKind, SimilarityScorer};
