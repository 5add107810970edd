//! Unit tests for Entity and code derivation rules

use dsr_domain::entities::{parent_code_of, Entity, SectionCategory};

#[test]
fn test_entity_derives_parent_code() {
    let entity = Entity::new("B1-K2-W3", "Plan maken", "Stelt een plan op.");
    assert_eq!(entity.code, "B1-K2-W3");
    assert_eq!(entity.parent_code, "B1-K2");
    assert_eq!(entity.title, "Plan maken");
    assert_eq!(entity.body, "Stelt een plan op.");
}

#[test]
fn test_entity_category_from_leading_letter() {
    assert_eq!(
        Entity::new("B1-K1-W1", "t", "b").category,
        SectionCategory::Base
    );
    assert_eq!(
        Entity::new("P2-K1-W1", "t", "b").category,
        SectionCategory::Profile
    );
    assert_eq!(
        Entity::new("G1-K1-W1", "t", "b").category,
        SectionCategory::General
    );
}

#[test]
fn test_category_accepts_lowercase_codes() {
    assert_eq!(SectionCategory::from_code("b1-k1-w1"), SectionCategory::Base);
    assert_eq!(
        SectionCategory::from_code("p1-k1-w1"),
        SectionCategory::Profile
    );
}

#[test]
fn test_category_of_empty_code_is_general() {
    assert_eq!(SectionCategory::from_code(""), SectionCategory::General);
}

#[test]
fn test_parent_code_requires_two_segments() {
    assert_eq!(parent_code_of("B1-K2-W3"), Some("B1-K2".to_string()));
    assert_eq!(parent_code_of("B1-K2"), Some("B1-K2".to_string()));
    assert_eq!(parent_code_of("B1"), None);
    assert_eq!(parent_code_of(""), None);
    assert_eq!(parent_code_of("-K2"), None);
    assert_eq!(parent_code_of("B1-"), None);
}

#[test]
fn test_entity_with_unparseable_code_keeps_code_as_parent() {
    let entity = Entity::new("X", "t", "b");
    assert_eq!(entity.parent_code, "X");
}

#[test]
fn test_category_labels_are_stable() {
    assert_eq!(SectionCategory::Base.to_string(), "base");
    assert_eq!(SectionCategory::Profile.to_string(), "profile");
    assert_eq!(SectionCategory::General.to_string(), "general");
}
