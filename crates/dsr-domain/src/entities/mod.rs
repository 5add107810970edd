//! Domain Entities
//!
//! Coded units of document content produced by segmentation. Entities are
//! built once per segmentation run from immutable source text and are never
//! mutated afterwards.

/// Coded document entity
pub mod entity;

pub use entity::{parent_code_of, Entity, SectionCategory};
