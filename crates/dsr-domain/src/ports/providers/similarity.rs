//! Similarity Scorer Port

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Text Resemblance Contract
///
/// Returns a scalar score in `[0, 1]` for a pair of text bodies. Scores are
/// symmetric within floating tolerance and `score(x, x) == 1.0` for
/// non-empty `x`. Two texts that are both empty score `1.0` (no content, no
/// difference); empty against non-empty scores `0.0`.
///
/// One scorer is selected per comparison run; strategies are never mixed
/// within a run. The aligner invokes `warm_up` with every body on both
/// sides before pairwise scoring begins, so implementations can encode each
/// distinct body once and reuse the encoded form across all pairs.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Encode every distinct body ahead of pairwise scoring.
    ///
    /// Default is a no-op for strategies with no per-body preparation cost.
    async fn warm_up(&self, _bodies: &[String]) -> Result<()> {
        Ok(())
    }

    /// Resemblance of two text bodies in `[0, 1]`
    async fn score(&self, text_a: &str, text_b: &str) -> Result<f32>;

    /// Identifier of the scoring strategy (e.g. "lexical", "semantic")
    fn strategy_name(&self) -> &str;
}

impl std::fmt::Debug for dyn SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}

/// Scoring strategy selected once per comparison run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Character-level fuzzy ratio, averaged across line pairs
    Lexical,
    /// Embedding cosine similarity over whole bodies
    Semantic,
}

impl ScorerKind {
    /// Stable lowercase label, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Semantic => "semantic",
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "semantic" => Ok(Self::Semantic),
            other => Err(Error::invalid_configuration(format!(
                "unknown scorer kind '{other}' (expected 'lexical' or 'semantic')"
            ))),
        }
    }
}
