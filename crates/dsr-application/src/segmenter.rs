//! Segmentation of Raw Text into Coded Entities
//!
//! Recognizes heading lines carrying a hierarchical section code (three
//! dash-joined letter+digit segments, e.g. `B1-K2-W3`) followed by a title
//! on the same line. The body of an entity spans from the end of its
//! heading to the start of the next heading, or the end of the text.
//!
//! Input is plain text already extracted from the source document; no
//! assumptions are made about page boundaries. Table-of-contents artifacts
//! (runs of periods followed by a page number) are dropped in a line-level
//! pre-pass so they cannot produce spurious heading matches.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use dsr_domain::entities::Entity;

/// Heading line: section code, optional colon, title on the same line
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Za-z]\d+-[A-Za-z]\d+-[A-Za-z]\d+)[ \t:]+(\S[^\r\n]*)$")
        .expect("heading pattern is valid")
});

/// Table-of-contents artifact: leader dots followed by a page number
static TOC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}\s*\d+\s*$").expect("toc pattern is valid"));

/// Parse raw text into an ordered sequence of coded entities.
///
/// Entities come back in text order, which approximates document order and
/// is not necessarily code order. Text without any recognizable heading
/// yields an empty vector; that signals "no recognizable structure" and is
/// not an error.
pub fn segment(text: &str) -> Vec<Entity> {
    let filtered = strip_toc_lines(text);

    let headings: Vec<(usize, usize, &str, &str)> = HEADING
        .captures_iter(&filtered)
        .map(|caps| {
            let whole = caps.get(0).expect("match has a whole capture");
            let code = caps.get(1).expect("match has a code capture").as_str();
            let title = caps.get(2).expect("match has a title capture").as_str();
            (whole.start(), whole.end(), code, title)
        })
        .collect();

    let entities: Vec<Entity> = headings
        .iter()
        .enumerate()
        .map(|(i, &(_, end, code, title))| {
            let body_end = headings
                .get(i + 1)
                .map_or(filtered.len(), |&(next_start, ..)| next_start);
            let body = filtered[end..body_end].trim();
            Entity::new(code, title.trim_end(), body)
        })
        .collect();

    debug!(count = entities.len(), "segmented text into entities");
    entities
}

/// Drop table-of-contents artifact lines before heading recognition.
///
/// This is a pre-pass over line-grouped text, not part of the heading
/// pattern itself: a contents line like `B1-K1-W1 Plan maken ..... 12`
/// would otherwise match as a heading.
fn strip_toc_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !TOC_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}
