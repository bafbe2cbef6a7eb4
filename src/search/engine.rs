use super::error::{DocsError, SearchResult};
use super::similarity::similarity;
use super::types::{SearchHits, Section, SectionHit};
use regex::Regex;

/// Title similarity a section must exceed to rank on its title alone.
pub const TITLE_SIMILARITY_THRESHOLD: f64 = 0.6;
/// Relevance assigned to sections that only match on content.
pub const CONTENT_MATCH_RELEVANCE: f64 = 0.5;
pub const MAX_SECTION_HITS: usize = 3;
pub const MAX_TEXT_MATCHES: usize = 5;

/// Answers a free-text query against a sectioned document.
///
/// Sections are ranked first; only when none qualifies is the raw document
/// scanned for whole sentences containing the query. `document` is `None`
/// when nothing was loaded, in which case `sections` is never looked at.
pub fn search(sections: &[Section], document: Option<&str>, query: &str) -> SearchResult {
    let Some(document) = document.filter(|text| !text.is_empty()) else {
        return Err(DocsError::DocumentUnavailable);
    };

    let hits = rank_sections(sections, query);
    if !hits.is_empty() {
        tracing::debug!("Query {:?} matched {} section(s)", query, hits.len());
        return Ok(SearchHits::Sections { sections: hits });
    }

    let matches = extract_sentences(document, query, MAX_TEXT_MATCHES);
    if !matches.is_empty() {
        tracing::debug!("Query {:?} fell back to {} sentence(s)", query, matches.len());
        return Ok(SearchHits::TextMatches { matches });
    }

    Err(DocsError::NoMatch {
        query: query.to_string(),
    })
}

/// Scores every section against the query and keeps the best three.
///
/// Ties keep document order.
pub fn rank_sections(sections: &[Section], query: &str) -> Vec<SectionHit> {
    let needle = query.to_lowercase();

    let mut hits: Vec<SectionHit> = Vec::new();
    for section in sections {
        let title_similarity = similarity(query, &section.title);
        let relevance = if title_similarity > TITLE_SIMILARITY_THRESHOLD {
            title_similarity
        } else if section.content.to_lowercase().contains(&needle) {
            CONTENT_MATCH_RELEVANCE
        } else {
            continue;
        };

        hits.push(SectionHit {
            title: section.title.clone(),
            content: section.content.clone(),
            relevance,
        });
    }

    hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    hits.truncate(MAX_SECTION_HITS);
    hits
}

/// Collects up to `limit` sentences of `document` that contain `query`,
/// compared case-insensitively and taken literally.
///
/// A sentence is a run of text without `.`, `!` or `?`, closed by one of them.
pub fn extract_sentences(document: &str, query: &str, limit: usize) -> Vec<String> {
    let pattern = format!(r"(?i)[^.!?]*(?:{})[^.!?]*[.!?]", regex::escape(query));
    let sentence = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Cannot build sentence pattern for query {:?}: {}", query, e);
            return Vec::new();
        }
    };

    sentence
        .find_iter(document)
        .take(limit)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
