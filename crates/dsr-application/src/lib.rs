//! DSR Application Layer
//!
//! Domain services of the reconciliation engine: segmentation of raw text
//! into coded entities, greedy cross-version alignment against a pluggable
//! similarity scorer, impact banding, and parent-level aggregation.
//!
//! Data flow: raw text → [`segmenter::segment`] → entity lists →
//! [`aligner::Aligner`] (uses a [`dsr_domain::ports::SimilarityScorer`] and
//! [`classifier::ImpactBands`] internally) → result list →
//! [`aggregator::aggregate`] → summary table. [`compare::ComparisonService`]
//! composes the whole pipeline.

/// Parent-level aggregation of result lists
pub mod aggregator;
/// Greedy cross-version entity alignment
pub mod aligner;
/// Similarity banding policy
pub mod classifier;
/// Comparison pipeline orchestration
pub mod compare;
/// Segmentation of raw text into coded entities
pub mod segmenter;

pub use aggregator::aggregate;
pub use aligner::Aligner;
pub use classifier::ImpactBands;
pub use compare::ComparisonService;
pub use segmenter::segment;
