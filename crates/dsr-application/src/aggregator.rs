//! Parent-Level Aggregation of Result Lists
//!
//! Groups per-entity results by `(parent_code, category)` and computes
//! summary counts and the mean of the ordinal impact scale. The group key
//! derives from whichever code a result carries, preferring the new
//! version's. Results whose code cannot be resolved to a parent land in the
//! `"unknown"` group rather than being dropped.

use std::collections::BTreeMap;

use tracing::warn;

use dsr_domain::constants::UNKNOWN_GROUP;
use dsr_domain::entities::{SectionCategory, parent_code_of};
use dsr_domain::value_objects::{MatchResult, MatchStatus, Summary};

#[derive(Default)]
struct GroupAccumulator {
    total: usize,
    modified_count: usize,
    added_count: usize,
    removed_count: usize,
    ordinal_sum: u64,
    banded_count: usize,
}

/// Aggregate a result list into one summary row per parent code and
/// category. Groups come back in sorted key order; a group with zero
/// members is never emitted.
pub fn aggregate(results: &[MatchResult]) -> Vec<Summary> {
    let mut groups: BTreeMap<(String, SectionCategory), GroupAccumulator> = BTreeMap::new();

    for result in results {
        let key = match result.grouping_code().and_then(parent_code_of) {
            Some(parent) => {
                let code = result.grouping_code().unwrap_or_default();
                (parent, SectionCategory::from_code(code))
            }
            None => {
                warn!(
                    old_code = ?result.old_code,
                    new_code = ?result.new_code,
                    "result code could not be resolved to a parent group"
                );
                (UNKNOWN_GROUP.to_string(), SectionCategory::General)
            }
        };

        let group = groups.entry(key).or_default();
        group.total += 1;
        match result.status {
            MatchStatus::Modified => group.modified_count += 1,
            MatchStatus::Added => group.added_count += 1,
            MatchStatus::Removed => group.removed_count += 1,
            MatchStatus::Unchanged | MatchStatus::Moved => {}
        }
        if let Some(ordinal) = result.impact_band.ordinal() {
            group.ordinal_sum += u64::from(ordinal);
            group.banded_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|((parent_code, category), group)| Summary {
            parent_code,
            category,
            total: group.total,
            modified_count: group.modified_count,
            added_count: group.added_count,
            removed_count: group.removed_count,
            mean_impact_score: if group.banded_count == 0 {
                0.0
            } else {
                group.ordinal_sum as f64 / group.banded_count as f64
            },
        })
        .collect()
}
