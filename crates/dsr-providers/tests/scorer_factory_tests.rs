//! Integration tests for scorer selection

use std::sync::Arc;

use dsr_domain::error::Error;
use dsr_domain::ports::providers::ScorerKind;
use dsr_providers::embedding::NullEmbeddingProvider;
use dsr_providers::scorer_for;

#[test]
fn test_lexical_needs_no_embedding_provider() {
    let scorer = scorer_for(ScorerKind::Lexical, None).unwrap();
    assert_eq!(scorer.strategy_name(), "lexical");
}

#[test]
fn test_semantic_requires_an_embedding_provider() {
    let err = scorer_for(ScorerKind::Semantic, None).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn test_semantic_with_a_provider() {
    let scorer = scorer_for(
        ScorerKind::Semantic,
        Some(Arc::new(NullEmbeddingProvider::new())),
    )
    .unwrap();
    assert_eq!(scorer.strategy_name(), "semantic");
}

#[test]
fn test_unknown_scorer_kind_is_rejected_at_parse_time() {
    let err = "hybrid".parse::<ScorerKind>().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert_eq!("lexical".parse::<ScorerKind>().unwrap(), ScorerKind::Lexical);
    assert_eq!(
        "Semantic".parse::<ScorerKind>().unwrap(),
        ScorerKind::Semantic
    );
}
