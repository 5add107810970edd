//! Comparison Pipeline Orchestration
//!
//! Composes the full engine over an injected similarity scorer:
//! segment both texts, align the entity lists, aggregate the results.

use std::sync::Arc;

use tracing::info;

use dsr_domain::error::Result;
use dsr_domain::ports::providers::SimilarityScorer;
use dsr_domain::value_objects::ComparisonReport;

use crate::aggregator::aggregate;
use crate::aligner::Aligner;
use crate::classifier::ImpactBands;
use crate::segmenter::segment;

/// Orchestrating service for one comparison run.
///
/// Holds the scorer selected for the run; strategies are never mixed
/// within a run. Construct once per run and discard.
#[derive(Debug)]
pub struct ComparisonService {
    aligner: Aligner,
}

impl ComparisonService {
    /// Build the service with the default band breakpoints.
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            aligner: Aligner::new(scorer),
        }
    }

    /// Build the service with custom band breakpoints, rejecting invalid
    /// ones before any work begins.
    pub fn with_bands(scorer: Arc<dyn SimilarityScorer>, bands: ImpactBands) -> Result<Self> {
        Ok(Self {
            aligner: Aligner::with_bands(scorer, bands)?,
        })
    }

    /// Compare two document texts and return per-entity results plus the
    /// parent-level summary table.
    pub async fn compare(
        &self,
        old_text: &str,
        new_text: &str,
        match_threshold: f32,
    ) -> Result<ComparisonReport> {
        let old_entities = segment(old_text);
        let new_entities = segment(new_text);
        info!(
            old = old_entities.len(),
            new = new_entities.len(),
            "segmented both document versions"
        );

        let results = self
            .aligner
            .align(&old_entities, &new_entities, match_threshold)
            .await?;
        let summaries = aggregate(&results);

        Ok(ComparisonReport { results, summaries })
    }
}
