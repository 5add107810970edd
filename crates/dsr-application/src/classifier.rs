//! Similarity Banding Policy
//!
//! Maps a scalar similarity score to a discrete impact band for the
//! modified-result path. The `unchanged`, `added`, `removed`, and `moved`
//! statuses bypass classification and are assigned directly by the aligner.
//!
//! The breakpoints are a policy choice, not a derived constant: they ride in
//! configuration so callers can recalibrate per document type.

use serde::{Deserialize, Serialize};

use dsr_domain::constants::{BAND_LOW_ABOVE, BAND_MODERATE_ABOVE, BAND_NONE_ABOVE};
use dsr_domain::error::{Error, Result};
use dsr_domain::value_objects::{ImpactBand, MatchStatus};

/// Band breakpoints for discretizing similarity scores.
///
/// Comparisons are strictly greater-than, highest band wins: similarity
/// above `none_above` carries no impact, above `low_above` low impact,
/// above `moderate_above` moderate impact, and anything at or below
/// `moderate_above` high impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImpactBands {
    /// Similarity above this breakpoint is no impact
    pub none_above: f32,
    /// Similarity above this breakpoint (up to `none_above`) is low impact
    pub low_above: f32,
    /// Similarity above this breakpoint (up to `low_above`) is moderate
    /// impact; at or below is high impact
    pub moderate_above: f32,
}

impl Default for ImpactBands {
    fn default() -> Self {
        Self {
            none_above: BAND_NONE_ABOVE,
            low_above: BAND_LOW_ABOVE,
            moderate_above: BAND_MODERATE_ABOVE,
        }
    }
}

impl ImpactBands {
    /// Reject breakpoints outside `[0, 1]` or out of descending order.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("none_above", self.none_above),
            ("low_above", self.low_above),
            ("moderate_above", self.moderate_above),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid_configuration(format!(
                    "band breakpoint {name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.none_above <= self.low_above || self.low_above <= self.moderate_above {
            return Err(Error::invalid_configuration(format!(
                "band breakpoints must descend: none_above ({}) > low_above ({}) > moderate_above ({})",
                self.none_above, self.low_above, self.moderate_above
            )));
        }
        Ok(())
    }

    /// Classify a similarity score on the modified-result path.
    pub fn classify(&self, similarity: f32) -> (MatchStatus, ImpactBand) {
        let band = if similarity > self.none_above {
            ImpactBand::None
        } else if similarity > self.low_above {
            ImpactBand::Low
        } else if similarity > self.moderate_above {
            ImpactBand::Moderate
        } else {
            ImpactBand::High
        };
        (MatchStatus::Modified, band)
    }
}
