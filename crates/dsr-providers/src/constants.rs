//! Provider constants

/// Embedding dimension of the default fastembed model (AllMiniLML6V2)
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;

/// Embedding dimension of the null provider (matches common models)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;
