//! Lexical Similarity Scorer
//!
//! Computes a normalized character-level edit-similarity ratio between two
//! text bodies. Multi-line bodies are compared line-by-line: for each line
//! of the second text, the best-matching line of the first text is found,
//! and the best-match ratios are averaged across the second text's lines.
//! This asymmetric pairing makes body-level similarity direction-sensitive
//! unless both texts share line structure; an accepted simplification.

use async_trait::async_trait;

use dsr_domain::error::Result;
use dsr_domain::ports::providers::SimilarityScorer;

/// Character-level edit-ratio scorer. Stateless; no per-body preparation.
pub struct LexicalScorer;

impl LexicalScorer {
    /// Create a new lexical scorer
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SimilarityScorer for LexicalScorer {
    async fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        Ok(line_pair_ratio(text_a, text_b))
    }

    fn strategy_name(&self) -> &str {
        "lexical"
    }
}

/// Mean best-match edit ratio across the second text's lines.
///
/// Two empty texts have no content and no difference (1.0); one empty
/// against one non-empty is complete difference (0.0).
fn line_pair_ratio(text_a: &str, text_b: &str) -> f32 {
    if text_a.is_empty() && text_b.is_empty() {
        return 1.0;
    }
    if text_a.is_empty() || text_b.is_empty() {
        return 0.0;
    }

    let lines_a: Vec<&str> = text_a.lines().collect();
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for line_b in text_b.lines() {
        let best = lines_a
            .iter()
            .map(|line_a| strsim::normalized_levenshtein(line_a, line_b))
            .fold(0.0f64, f64::max);
        sum += best;
        count += 1;
    }

    if count == 0 {
        0.0
    } else {
        (sum / count as f64) as f32
    }
}
