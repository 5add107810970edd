//! Embedding Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`FastEmbedProvider`] | Local ONNX embeddings via fastembed (feature `embedding-fastembed`) |
//! | [`NullEmbeddingProvider`] | Deterministic hash-based embeddings for tests and offline use |

/// FastEmbed local embedding provider
#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
/// Null embedding provider for testing and development
pub mod null;

#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use null::NullEmbeddingProvider;
