use thiserror::Error;

/// Failures a documentation query can report back to its caller.
///
/// Neither variant is fatal: transports turn them into an `"error"` status
/// with the display message as the payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocsError {
    /// No document was ever loaded (or the loaded text was empty).
    #[error("Documentation not available")]
    DocumentUnavailable,

    /// The document is loaded but neither ranking nor sentence extraction
    /// produced anything for the query.
    #[error("No results found for query: {query}")]
    NoMatch { query: String },
}

pub type SearchResult = Result<super::types::SearchHits, DocsError>;
