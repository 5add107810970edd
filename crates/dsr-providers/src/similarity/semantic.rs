//! Semantic Similarity Scorer
//!
//! Encodes each body into a fixed-size vector through an injected
//! [`EmbeddingProvider`] and returns cosine similarity between the two
//! vectors, computed over the whole body as one unit rather than
//! line-by-line.
//!
//! Encoding cost dominates, so each distinct body is encoded once: the
//! aligner's warm-up pass batch-encodes every body into a shared cache
//! before pairwise scoring begins, and the cache is read-mostly afterwards.
//! On-demand single encodes cover cache misses.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use dsr_domain::error::Result;
use dsr_domain::ports::providers::{EmbeddingProvider, SimilarityScorer};

/// Embedding cosine scorer with a per-run encode cache
pub struct SemanticScorer {
    embedding: Arc<dyn EmbeddingProvider>,
    cache: DashMap<String, Arc<Vec<f32>>>,
}

impl SemanticScorer {
    /// Create a semantic scorer over an embedding provider
    pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedding,
            cache: DashMap::new(),
        }
    }

    /// Fetch the cached vector for a body, encoding on a miss.
    async fn body_vector(&self, text: &str) -> Result<Arc<Vec<f32>>> {
        if let Some(vector) = self.cache.get(text) {
            return Ok(Arc::clone(&vector));
        }
        let encoded = self.embedding.embed(text).await?;
        let vector = Arc::new(encoded.vector);
        self.cache.insert(text.to_string(), Arc::clone(&vector));
        Ok(vector)
    }
}

#[async_trait]
impl SimilarityScorer for SemanticScorer {
    async fn warm_up(&self, bodies: &[String]) -> Result<()> {
        let pending: Vec<String> = {
            let mut seen = std::collections::HashSet::new();
            bodies
                .iter()
                .filter(|b| !b.is_empty() && !self.cache.contains_key(*b) && seen.insert(*b))
                .cloned()
                .collect()
        };
        if pending.is_empty() {
            return Ok(());
        }

        let encoded = self.embedding.embed_batch(&pending).await?;
        for (body, embedding) in pending.into_iter().zip(encoded) {
            self.cache.insert(body, Arc::new(embedding.vector));
        }
        debug!(encoded = self.cache.len(), "semantic encode cache warmed");
        Ok(())
    }

    async fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        if text_a.is_empty() && text_b.is_empty() {
            return Ok(1.0);
        }
        if text_a.is_empty() || text_b.is_empty() {
            return Ok(0.0);
        }

        let vector_a = self.body_vector(text_a).await?;
        let vector_b = self.body_vector(text_b).await?;
        Ok(cosine_similarity_with_norm(
            &vector_a,
            &vector_b,
            compute_norm(&vector_a),
        ))
    }

    fn strategy_name(&self) -> &str {
        "semantic"
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed first-operand norm
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        // Normalize to [0, 1] range
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_of_identical_vectors_is_one() {
        let v = [0.5, 0.25, 0.75];
        let score = cosine_similarity_with_norm(&v, &v, compute_norm(&v));
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_of_orthogonal_vectors_is_half() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        let score = cosine_similarity_with_norm(&a, &b, compute_norm(&a));
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let a = [0.0, 0.0];
        let b = [1.0, 1.0];
        assert_eq!(cosine_similarity_with_norm(&a, &b, compute_norm(&a)), 0.0);
    }
}
