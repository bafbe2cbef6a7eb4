//! Ingestion Data Types

use std::path::PathBuf;

/// Where the served documentation text was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// The service-local copy written by an earlier run or by `d2-docs-setup`.
    Cache(PathBuf),
    /// The original documentation file; a cache copy was attempted afterwards.
    Source(PathBuf),
}

/// Documentation text ready to be handed to the `DocumentStore`.
#[derive(Debug, Clone)]
pub struct LoadedDocumentation {
    pub text: String,
    pub origin: DocumentOrigin,
}
