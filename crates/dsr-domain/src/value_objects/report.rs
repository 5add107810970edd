//! Comparison Run Output

use serde::{Deserialize, Serialize};

use crate::value_objects::{MatchResult, Summary};

/// Full output of one comparison run: per-entity results plus the
/// parent-level summary table derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    /// One result per entity on either side
    pub results: Vec<MatchResult>,
    /// Aggregated rows grouped by parent code and category
    pub summaries: Vec<Summary>,
}
