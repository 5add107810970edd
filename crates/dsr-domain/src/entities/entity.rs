//! Coded document entity

use serde::{Deserialize, Serialize};

/// Category of a document section, derived from the leading letter of its
/// code (`B1-…` is base material, `P1-…` profile material, anything else is
/// general).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    /// Base qualification material (`B…` codes)
    Base,
    /// Profile-specific material (`P…` codes)
    Profile,
    /// Everything else
    General,
}

impl SectionCategory {
    /// Derive the category from the leading character of a section code
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('B' | 'b') => Self::Base,
            Some('P' | 'p') => Self::Profile,
            _ => Self::General,
        }
    }

    /// Stable lowercase label, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Profile => "profile",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for SectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the parent code by truncating a section code to its first two
/// dash-joined segments (`B1-K2-W3` → `B1-K2`). Returns `None` when the code
/// does not have at least two non-empty segments.
pub fn parent_code_of(code: &str) -> Option<String> {
    let mut segments = code.split('-');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let second = segments.next().filter(|s| !s.is_empty())?;
    Some(format!("{first}-{second}"))
}

/// Entity: One Coded Unit of Document Content
///
/// Represents one section extracted from a structured document: a
/// hierarchical code (`B1-K2-W3`), the title following the code on the
/// heading line, and the body text up to the next heading.
///
/// ## Business Rules
///
/// - The parent code is the first two segments of the code
/// - The category follows from the code's leading letter
/// - The body may be empty; leading/trailing whitespace is trimmed
///
/// ## Example
///
/// ```rust
/// use dsr_domain::entities::{Entity, SectionCategory};
///
/// let entity = Entity::new("B1-K1-W1", "Plan maken", "Stelt een plan op.");
/// assert_eq!(entity.parent_code, "B1-K1");
/// assert_eq!(entity.category, SectionCategory::Base);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    /// Hierarchical section code (three dash-joined segments)
    pub code: String,
    /// Code truncated to its first two segments, shared by sibling entities
    pub parent_code: String,
    /// Category derived from the code prefix
    pub category: SectionCategory,
    /// Short label following the code on the heading line
    pub title: String,
    /// Text between this heading and the next (may be empty)
    pub body: String,
}

impl Entity {
    /// Build an entity, deriving the parent code and category from `code`.
    ///
    /// A code without two hierarchical segments keeps itself as its parent;
    /// segmentation only produces three-segment codes, so this arises only
    /// for hand-built entities.
    pub fn new<C, T, B>(code: C, title: T, body: B) -> Self
    where
        C: Into<String>,
        T: Into<String>,
        B: Into<String>,
    {
        let code = code.into();
        let parent_code = parent_code_of(&code).unwrap_or_else(|| code.clone());
        let category = SectionCategory::from_code(&code);
        Self {
            code,
            parent_code,
            category,
            title: title.into(),
            body: body.into(),
        }
    }
}
