use serde::{Deserialize, Serialize};

/// Title given to the text that precedes the first heading of a document.
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// A titled, contiguous span of the documentation.
///
/// `content` is the verbatim slice of the document starting at `start_offset`,
/// heading line included, so concatenating every section in order gives back
/// the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    pub start_offset: usize,
}

/// A section that qualified for a query, with its ranking score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHit {
    pub title: String,
    pub content: String,
    /// Title similarity when it cleared the threshold, otherwise the fixed
    /// content-match score.
    pub relevance: f64,
}

/// Successful outcome of a documentation search.
///
/// Serialized with a `type` tag so transports can forward it unchanged:
/// `{"type": "sections", "sections": [...]}` or
/// `{"type": "text_matches", "matches": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHits {
    Sections { sections: Vec<SectionHit> },
    TextMatches { matches: Vec<String> },
}

/// Snapshot of the whole document as returned by `fetch_whole`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WholeDocument {
    pub text: Option<String>,
    pub available: bool,
}
