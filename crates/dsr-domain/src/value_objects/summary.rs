//! Aggregated Parent-Level Summaries

use serde::{Deserialize, Serialize};

use crate::entities::SectionCategory;

/// Value Object: Aggregated Row per Parent Code and Category
///
/// Derived purely from a result list; recomputed on every comparison run.
///
/// ## Business Rules
///
/// - A group with zero members is never emitted
/// - `mean_impact_score` averages the ordinal impact scale
///   (none=0, low=1, moderate=2, high=3); unknown bands are excluded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Shared parent code of the group (`"unknown"` for unresolvable codes)
    pub parent_code: String,
    /// Section category of the group
    pub category: SectionCategory,
    /// Number of results in the group
    pub total: usize,
    /// Results classified as modified
    pub modified_count: usize,
    /// Results classified as added
    pub added_count: usize,
    /// Results classified as removed
    pub removed_count: usize,
    /// Mean of the ordinal impact scale over the group's banded members
    pub mean_impact_score: f64,
}
