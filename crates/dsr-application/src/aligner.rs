//! Greedy Cross-Version Entity Alignment
//!
//! Computes a one-to-one partial matching between the OLD and NEW entity
//! lists plus classifications for unmatched items. The matching is
//! OLD-anchored and greedy: each OLD entity, in OLD's order, commits to its
//! best still-available NEW candidate without backtracking. Ties go to the
//! first candidate in NEW's iteration order. This is deliberately not a
//! maximum-weight bipartite assignment; the tie-break determinism is part
//! of the observable contract.
//!
//! Candidate scores for one OLD entity are computed concurrently and
//! reduced with a strictly-greater comparison, so concurrency cannot
//! disturb the tie-break. The consumed set is only mutated after the
//! reduction, and consumption order stays sequential across OLD entities.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use dsr_domain::entities::Entity;
use dsr_domain::error::{Error, Result};
use dsr_domain::ports::providers::SimilarityScorer;
use dsr_domain::value_objects::{ImpactBand, MatchResult, MatchStatus};

use crate::classifier::ImpactBands;

/// Greedy one-to-one aligner over a pluggable similarity scorer
#[derive(Debug)]
pub struct Aligner {
    scorer: Arc<dyn SimilarityScorer>,
    bands: ImpactBands,
}

impl Aligner {
    /// Build an aligner with the default band breakpoints.
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            scorer,
            bands: ImpactBands::default(),
        }
    }

    /// Build an aligner with custom band breakpoints, rejecting invalid ones.
    pub fn with_bands(scorer: Arc<dyn SimilarityScorer>, bands: ImpactBands) -> Result<Self> {
        bands.validate()?;
        Ok(Self { scorer, bands })
    }

    /// Align two ordered entity lists into one result per entity.
    ///
    /// Every OLD entity appears in exactly one result as either the matched
    /// side or a `removed` record; every NEW entity as either the matched
    /// side or an `added` record. Empty inputs are not an error: comparison
    /// against an empty list yields all entities of the other side
    /// classified as added or removed.
    pub async fn align(
        &self,
        old: &[Entity],
        new: &[Entity],
        match_threshold: f32,
    ) -> Result<Vec<MatchResult>> {
        if !(0.0..=1.0).contains(&match_threshold) {
            return Err(Error::invalid_configuration(format!(
                "match_threshold must be within [0, 1], got {match_threshold}"
            )));
        }

        // Encode every body once before any pairwise scoring
        let bodies: Vec<String> = old
            .iter()
            .chain(new.iter())
            .map(|e| e.body.clone())
            .collect();
        self.scorer.warm_up(&bodies).await?;

        let mut consumed = vec![false; new.len()];
        let mut results = Vec::with_capacity(old.len() + new.len());

        for old_entity in old {
            // Identical bodies bypass scoring and the threshold entirely
            if let Some(j) = (0..new.len()).find(|&j| !consumed[j] && new[j].body == old_entity.body)
            {
                consumed[j] = true;
                results.push(self.matched(old_entity, &new[j], 1.0));
                continue;
            }

            let candidates: Vec<usize> = (0..new.len()).filter(|&j| !consumed[j]).collect();
            let scores: Vec<f32> = join_all(candidates.iter().map(|&j| {
                let candidate = &new[j];
                async move {
                    self.scorer
                        .score(&old_entity.body, &candidate.body)
                        .await
                        .map_err(|e| {
                            Error::scoring_with_source(
                                format!(
                                    "scoring old entity {} against new entity {}",
                                    old_entity.code, candidate.code
                                ),
                                e,
                            )
                        })
                }
            }))
            .await
            .into_iter()
            .collect::<Result<_>>()?;

            // Strictly-greater reduction: the first NEW index wins ties
            let mut best: Option<(usize, f32)> = None;
            for (&j, &score) in candidates.iter().zip(scores.iter()) {
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((j, score));
                }
            }

            match best {
                Some((j, score)) if score > match_threshold => {
                    consumed[j] = true;
                    debug!(
                        old_code = %old_entity.code,
                        new_code = %new[j].code,
                        score,
                        "accepted match"
                    );
                    results.push(self.matched(old_entity, &new[j], score));
                }
                _ => {
                    debug!(old_code = %old_entity.code, "no candidate above threshold");
                    results.push(MatchResult::removed(old_entity));
                }
            }
        }

        for (j, new_entity) in new.iter().enumerate() {
            if !consumed[j] {
                results.push(MatchResult::added(new_entity));
            }
        }

        info!(
            old = old.len(),
            new = new.len(),
            results = results.len(),
            "alignment complete"
        );
        Ok(results)
    }

    /// Classify an accepted OLD/NEW pair.
    ///
    /// An empty body on exactly one side is an addition or removal of
    /// content regardless of the score; same titled content filed under a
    /// different code is a move and always low impact; identical bodies are
    /// unchanged; everything else lands in a similarity band.
    fn matched(&self, old: &Entity, new: &Entity, similarity: f32) -> MatchResult {
        let (status, impact_band, narrative) = if old.body.is_empty() && !new.body.is_empty() {
            (
                MatchStatus::Added,
                ImpactBand::Moderate,
                "Section body added in the new version".to_string(),
            )
        } else if !old.body.is_empty() && new.body.is_empty() {
            (
                MatchStatus::Removed,
                ImpactBand::High,
                "Section body removed in the new version".to_string(),
            )
        } else if old.code != new.code && old.title == new.title {
            (
                MatchStatus::Moved,
                ImpactBand::Low,
                format!("Section moved from {} to {}", old.code, new.code),
            )
        } else if old.body == new.body {
            (
                MatchStatus::Unchanged,
                ImpactBand::None,
                "Body text is identical".to_string(),
            )
        } else {
            let (status, band) = self.bands.classify(similarity);
            (
                status,
                band,
                format!(
                    "Content change detected (mean similarity {:.0}%)",
                    similarity * 100.0
                ),
            )
        };

        MatchResult {
            old_code: Some(old.code.clone()),
            new_code: Some(new.code.clone()),
            title: new.title.clone(),
            old_body: old.body.clone(),
            new_body: new.body.clone(),
            status,
            similarity: Some(similarity),
            impact_band,
            narrative,
        }
    }
}
