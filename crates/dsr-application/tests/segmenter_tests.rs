//! Integration tests for text segmentation

use dsr_application::segment;
use dsr_domain::entities::SectionCategory;

#[test]
fn test_segments_headings_with_bodies() {
    let text = "\
B1-K1-W1 Plan maken
Stelt een plan op.
Werkt het plan uit.
B1-K1-W2 Plan uitvoeren
Voert het plan uit.";

    let entities = segment(text);
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].code, "B1-K1-W1");
    assert_eq!(entities[0].title, "Plan maken");
    assert_eq!(entities[0].body, "Stelt een plan op.\nWerkt het plan uit.");
    assert_eq!(entities[1].code, "B1-K1-W2");
    assert_eq!(entities[1].body, "Voert het plan uit.");
}

#[test]
fn test_colon_after_code_is_accepted() {
    let entities = segment("B1-K1-W1: Plan maken\nbody text");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].title, "Plan maken");
    assert_eq!(entities[0].body, "body text");
}

#[test]
fn test_last_entity_body_runs_to_end_of_text() {
    let entities = segment("P1-K2-W3 Afronden\nlaatste tekst\n\n");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].body, "laatste tekst");
    assert_eq!(entities[0].category, SectionCategory::Profile);
}

#[test]
fn test_entity_body_may_be_empty() {
    let entities = segment("B1-K1-W1 Eerste\nB1-K1-W2 Tweede\ninhoud");
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].body, "");
    assert_eq!(entities[1].body, "inhoud");
}

#[test]
fn test_entities_come_back_in_text_order() {
    let text = "B1-K2-W9 Laat\nx\nB1-K1-W1 Vroeg\ny";
    let entities = segment(text);
    let codes: Vec<&str> = entities.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["B1-K2-W9", "B1-K1-W1"]);
}

#[test]
fn test_text_without_structure_yields_empty_list() {
    assert!(segment("just prose, no codes anywhere").is_empty());
    assert!(segment("").is_empty());
}

#[test]
fn test_toc_lines_are_not_headings() {
    let text = "\
Inhoudsopgave
B1-K1-W1 Plan maken ........ 12
B1-K1-W2 Plan uitvoeren .......... 14

B1-K1-W1 Plan maken
echte inhoud";

    let entities = segment(text);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].code, "B1-K1-W1");
    assert_eq!(entities[0].body, "echte inhoud");
}

#[test]
fn test_toc_filtering_keeps_surrounding_body_text() {
    let text = "\
B1-K1-W1 Plan maken
eerste regel
zie overzicht ..... 3
tweede regel";

    let entities = segment(text);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].body, "eerste regel\ntweede regel");
}

#[test]
fn test_heading_requires_title_on_same_line() {
    // A bare code line is not a heading
    let entities = segment("B1-K1-W1\nbody without title");
    assert!(entities.is_empty());
}
