//! Integration tests for the semantic similarity scorer over the null
//! embedding provider

use std::sync::Arc;

use dsr_domain::ports::providers::{EmbeddingProvider, SimilarityScorer};
use dsr_providers::embedding::NullEmbeddingProvider;
use dsr_providers::similarity::SemanticScorer;

fn scorer() -> SemanticScorer {
    SemanticScorer::new(Arc::new(NullEmbeddingProvider::new()))
}

#[tokio::test]
async fn test_identical_text_scores_one() {
    let scorer = scorer();
    let score = scorer
        .score("Stelt een plan op.", "Stelt een plan op.")
        .await
        .unwrap();
    assert!((score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_empty_rules() {
    let scorer = scorer();
    assert_eq!(scorer.score("", "").await.unwrap(), 1.0);
    assert_eq!(scorer.score("abc", "").await.unwrap(), 0.0);
    assert_eq!(scorer.score("", "abc").await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_score_is_symmetric() {
    let scorer = scorer();
    let a = "Stelt een plan op voor de werkzaamheden.";
    let b = "Schrijft een rapport over de uitkomst.";
    let forward = scorer.score(a, b).await.unwrap();
    let backward = scorer.score(b, a).await.unwrap();
    assert!((forward - backward).abs() < 1e-6);
}

#[tokio::test]
async fn test_score_is_deterministic_across_calls() {
    let scorer = scorer();
    let first = scorer.score("tekst een", "tekst twee").await.unwrap();
    let second = scorer.score("tekst een", "tekst twee").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_warm_up_matches_on_demand_encoding() {
    let bodies = vec!["eerste tekst".to_string(), "tweede tekst".to_string()];

    let warmed = scorer();
    warmed.warm_up(&bodies).await.unwrap();
    let warmed_score = warmed.score(&bodies[0], &bodies[1]).await.unwrap();

    let cold = scorer();
    let cold_score = cold.score(&bodies[0], &bodies[1]).await.unwrap();

    assert_eq!(warmed_score, cold_score);
}

#[tokio::test]
async fn test_warm_up_tolerates_duplicates_and_empties() {
    let scorer = scorer();
    let bodies = vec![
        "zelfde tekst".to_string(),
        "zelfde tekst".to_string(),
        String::new(),
    ];
    scorer.warm_up(&bodies).await.unwrap();
    let score = scorer.score("zelfde tekst", "zelfde tekst").await.unwrap();
    assert!((score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_null_provider_embeddings_are_deterministic() {
    let provider = NullEmbeddingProvider::new();
    let first = provider.embed("een tekst").await.unwrap();
    let second = provider.embed("een tekst").await.unwrap();
    assert_eq!(first.vector, second.vector);
    assert_eq!(first.dimensions, 384);
    assert_eq!(provider.provider_name(), "null");
}

#[tokio::test]
async fn test_batch_embedding_is_position_independent() {
    let provider = NullEmbeddingProvider::new();
    let solo = provider.embed("doel tekst").await.unwrap();
    let batched = provider
        .embed_batch(&["andere tekst".to_string(), "doel tekst".to_string()])
        .await
        .unwrap();
    assert_eq!(solo.vector, batched[1].vector);
}

#[tokio::test]
async fn test_strategy_name() {
    assert_eq!(scorer().strategy_name(), "semantic");
}
