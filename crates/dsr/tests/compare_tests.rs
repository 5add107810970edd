//! Integration tests for the facade entry points

use std::io::Write;

use dsr_domain::error::Error;
use dsr_domain::ports::providers::ScorerKind;
use dsr_domain::value_objects::MatchStatus;

#[tokio::test]
async fn test_compare_composes_the_full_pipeline() {
    let old_text = "\
B1-K1-W1 Plan maken
Stelt een plan op voor de werkzaamheden.
B1-K1-W2 Plan uitvoeren
Voert het plan uit volgens afspraak.";
    let new_text = "\
B1-K1-W1 Plan maken
Stelt een plan op voor de werkzaamheden.";

    let report = dsr::compare(old_text, new_text, ScorerKind::Lexical, 0.6)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].status, MatchStatus::Unchanged);
    assert_eq!(report.results[1].status, MatchStatus::Removed);
    let total: usize = report.summaries.iter().map(|s| s.total).sum();
    assert_eq!(total, report.results.len());
}

#[tokio::test]
async fn test_compare_rejects_an_invalid_threshold() {
    let err = dsr::compare("a", "b", ScorerKind::Lexical, 2.0)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn test_read_text_rejects_non_utf8_bytes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = dsr::read_text(file.path()).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}

#[test]
fn test_read_text_reports_missing_files_as_io_errors() {
    let err = dsr::read_text(std::path::Path::new("/nonexistent/input.txt")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
