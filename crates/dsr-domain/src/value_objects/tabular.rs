//! Tabular Export Seam
//!
//! Result and summary records are consumed by external collaborators
//! (spreadsheet export, UI rendering) as ordered rows of named scalar
//! fields. Column names are stable across versions.

use crate::value_objects::{MatchResult, Summary};

/// A record exportable as one row of named scalar columns
pub trait TabularRecord {
    /// Column names, in row order. Stable across versions.
    fn headers() -> &'static [&'static str];

    /// Field values in the same order as [`Self::headers`]
    fn row(&self) -> Vec<String>;
}

impl TabularRecord for MatchResult {
    fn headers() -> &'static [&'static str] {
        &[
            "old_code",
            "new_code",
            "title",
            "old_body",
            "new_body",
            "status",
            "similarity",
            "impact_band",
            "narrative",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.old_code.clone().unwrap_or_default(),
            self.new_code.clone().unwrap_or_default(),
            self.title.clone(),
            self.old_body.clone(),
            self.new_body.clone(),
            self.status.to_string(),
            self.similarity.map(|s| format!("{s:.2}")).unwrap_or_default(),
            self.impact_band.to_string(),
            self.narrative.clone(),
        ]
    }
}

impl TabularRecord for Summary {
    fn headers() -> &'static [&'static str] {
        &[
            "parent_code",
            "category",
            "total",
            "modified_count",
            "added_count",
            "removed_count",
            "mean_impact_score",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.parent_code.clone(),
            self.category.to_string(),
            self.total.to_string(),
            self.modified_count.to_string(),
            self.added_count.to_string(),
            self.removed_count.to_string(),
            format!("{:.2}", self.mean_impact_score),
        ]
    }
}
