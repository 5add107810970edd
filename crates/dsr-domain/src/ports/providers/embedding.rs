//! Embedding Provider Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Text Embedding Contract
///
/// Defines the contract for providers that transform text bodies into
/// semantic embeddings. The underlying model is typically expensive to
/// initialize and process-wide; implementations are constructed once and
/// shared as `Arc<dyn EmbeddingProvider>` so the engine stays free of
/// hidden global state and tests can inject doubles.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers
/// only need to implement `embed_batch()` unless single-item calls can be
/// served more cheaply.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
