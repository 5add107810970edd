//! Per-Entity Reconciliation Outcomes
//!
//! One [`MatchResult`] is produced for every entity on either side of a
//! comparison: matched pairs carry both codes, pure additions and removals
//! carry one. Every entity appears in exactly one result.

use serde::{Deserialize, Serialize};

use crate::entities::Entity;

/// Status of one entity across the two document versions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Body text is identical across versions
    Unchanged,
    /// Matched with a content change
    Modified,
    /// Present only in the new version
    Added,
    /// Present only in the old version
    Removed,
    /// Same titled content filed under a different code
    Moved,
}

impl MatchStatus {
    /// Stable lowercase label, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Moved => "moved",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discretized severity of a detected change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImpactBand {
    /// No meaningful change
    None,
    /// Minor change
    Low,
    /// Substantial change
    Moderate,
    /// Major change, removal, or content below the match threshold
    High,
    /// Code could not be resolved; severity undetermined
    Unknown,
}

impl ImpactBand {
    /// Ordinal scale used for aggregation means. `Unknown` has no ordinal
    /// and is excluded from means.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Self::None => Some(0),
            Self::Low => Some(1),
            Self::Moderate => Some(2),
            Self::High => Some(3),
            Self::Unknown => None,
        }
    }

    /// Stable lowercase label, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ImpactBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Reconciliation Outcome for One Entity
///
/// ## Business Rules
///
/// - `old_code`/`new_code` are `None` when the entity is absent from that
///   version; at least one is always present
/// - `similarity` is `None` exactly when no score was computed (pure
///   additions and removals)
/// - Every OLD and NEW entity appears in exactly one result across a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Code in the old version, if present there
    pub old_code: Option<String>,
    /// Code in the new version, if present there
    pub new_code: Option<String>,
    /// Section title (the new version's title when both are present)
    pub title: String,
    /// Body text in the old version
    pub old_body: String,
    /// Body text in the new version
    pub new_body: String,
    /// Classification of the change
    pub status: MatchStatus,
    /// Score that produced the classification, when one was computed
    pub similarity: Option<f32>,
    /// Discretized severity
    pub impact_band: ImpactBand,
    /// Short human-readable explanation
    pub narrative: String,
}

impl MatchResult {
    /// Record for an OLD entity with no accepted match in the new version
    pub fn removed(entity: &Entity) -> Self {
        Self {
            old_code: Some(entity.code.clone()),
            new_code: None,
            title: entity.title.clone(),
            old_body: entity.body.clone(),
            new_body: String::new(),
            status: MatchStatus::Removed,
            similarity: None,
            impact_band: ImpactBand::High,
            narrative: "Section removed in the new version".to_string(),
        }
    }

    /// Record for a NEW entity never consumed by a match
    pub fn added(entity: &Entity) -> Self {
        Self {
            old_code: None,
            new_code: Some(entity.code.clone()),
            title: entity.title.clone(),
            old_body: String::new(),
            new_body: entity.body.clone(),
            status: MatchStatus::Added,
            similarity: None,
            impact_band: ImpactBand::Moderate,
            narrative: "New section in the new version".to_string(),
        }
    }

    /// The code used for grouping: the new version's when present,
    /// otherwise the old version's.
    pub fn grouping_code(&self) -> Option<&str> {
        self.new_code.as_deref().or(self.old_code.as_deref())
    }
}
