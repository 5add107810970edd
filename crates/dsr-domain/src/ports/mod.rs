//! Domain Ports
//!
//! Contracts the engine depends on but does not implement. Provider
//! implementations live in the `dsr-providers` crate and are injected
//! as `Arc<dyn …>` trait objects.

/// External provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, ScorerKind, SimilarityScorer};
