use super::types::{INTRODUCTION_TITLE, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// A Markdown-style heading: one or more `#`, horizontal whitespace, then a
/// non-empty title running to the end of the line.
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+[ \t]+(\S[^\r\n]*)").expect("heading pattern compiles"));

/// Splits a document into titled sections at every heading line.
///
/// Each heading opens a section that runs up to the next heading (or the end
/// of the document). Text before the first heading becomes an `Introduction`
/// section, which is only emitted when non-empty. An empty document yields no
/// sections; a document without headings yields a single `Introduction`.
pub fn segment(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut pending_title = INTRODUCTION_TITLE;
    let mut span_start = 0usize;

    for caps in HEADING_PATTERN.captures_iter(document) {
        let (Some(heading), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if heading.start() > span_start {
            sections.push(Section {
                title: pending_title.to_string(),
                content: document[span_start..heading.start()].to_string(),
                start_offset: span_start,
            });
        }

        pending_title = title.as_str().trim_end();
        span_start = heading.start();
    }

    if span_start < document.len() {
        sections.push(Section {
            title: pending_title.to_string(),
            content: document[span_start..].to_string(),
            start_offset: span_start,
        });
    }

    sections
}
