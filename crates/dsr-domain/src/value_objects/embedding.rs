//! Semantic Embedding Value Objects
//!
//! Value objects representing vector embeddings of text bodies, the
//! foundation of the semantic similarity strategy.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of a text body that captures semantic
/// meaning. Cosine similarity between two embeddings approximates the
/// resemblance of the bodies they encode.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - Dimensions must match the producing model
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}
