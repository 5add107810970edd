//! Integration tests for the lexical similarity scorer

use dsr_providers::similarity::LexicalScorer;

use dsr_domain::ports::providers::SimilarityScorer;

#[tokio::test]
async fn test_identical_text_scores_one() {
    let scorer = LexicalScorer::new();
    let score = scorer.score("Stelt een plan op.", "Stelt een plan op.").await.unwrap();
    assert_eq!(score, 1.0);
}

#[tokio::test]
async fn test_empty_rules() {
    let scorer = LexicalScorer::new();
    assert_eq!(scorer.score("", "").await.unwrap(), 1.0);
    assert_eq!(scorer.score("abc", "").await.unwrap(), 0.0);
    assert_eq!(scorer.score("", "abc").await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_single_line_score_is_symmetric() {
    let scorer = LexicalScorer::new();
    let a = "The quick brown fox";
    let b = "The quick brown cat";
    let forward = scorer.score(a, b).await.unwrap();
    let backward = scorer.score(b, a).await.unwrap();
    assert!((forward - backward).abs() < 1e-6);
    assert!(forward > 0.5 && forward < 1.0);
}

#[tokio::test]
async fn test_reordered_lines_still_find_their_best_match() {
    let scorer = LexicalScorer::new();
    let a = "eerste regel\ntweede regel\nderde regel";
    let b = "derde regel\neerste regel\ntweede regel";
    let score = scorer.score(a, b).await.unwrap();
    assert!((score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_extra_line_in_second_text_lowers_the_score() {
    let scorer = LexicalScorer::new();
    let a = "eerste regel";
    let b = "eerste regel\nnieuwe regel zonder tegenhanger qqq";
    let score = scorer.score(a, b).await.unwrap();
    assert!(score < 1.0);
    assert!(score > 0.0);
}

#[tokio::test]
async fn test_scores_stay_in_the_unit_interval() {
    let scorer = LexicalScorer::new();
    let pairs = [
        ("abc", "xyz"),
        ("korte tekst", "een veel langere tekst met meer inhoud"),
        ("a\nb\nc", "c\nb\na"),
    ];
    for (a, b) in pairs {
        let score = scorer.score(a, b).await.unwrap();
        assert!((0.0..=1.0).contains(&score), "{a} vs {b} gave {score}");
    }
}

#[tokio::test]
async fn test_strategy_name() {
    assert_eq!(LexicalScorer::new().strategy_name(), "lexical");
}
