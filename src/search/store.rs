use super::engine;
use super::error::SearchResult;
use super::sectionizer::segment;
use super::types::{Section, WholeDocument};
use parking_lot::RwLock;
use std::sync::Arc;

/// A loaded document together with its section index.
///
/// Built in one go and never mutated afterwards, so it can be shared between
/// concurrent queries behind an `Arc`.
#[derive(Debug)]
pub struct DocumentIndex {
    text: String,
    sections: Vec<Section>,
}

impl DocumentIndex {
    pub fn build(text: String) -> Self {
        let sections = segment(&text);
        Self { text, sections }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn search(&self, query: &str) -> SearchResult {
        engine::search(&self.sections, Some(&self.text), query)
    }
}

/// Owner of the documentation served by the transports.
///
/// Starts out empty; `load_document` publishes a fully built index in a single
/// swap, so readers see either no document or a complete one.
#[derive(Debug, Default)]
pub struct DocumentStore {
    index: RwLock<Option<Arc<DocumentIndex>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store that already serves `text`.
    pub fn with_document(text: impl Into<String>) -> Self {
        let store = Self::new();
        store.load_document(text);
        store
    }

    /// Parses `text` and makes it the served document.
    ///
    /// Empty text never replaces anything: the store keeps whatever it served
    /// before (possibly nothing).
    pub fn load_document(&self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            tracing::warn!("Ignoring empty documentation text");
            return;
        }

        let index = DocumentIndex::build(text);
        tracing::info!(
            "Parsed {} documentation sections ({} bytes)",
            index.sections().len(),
            index.text().len()
        );

        *self.index.write() = Some(Arc::new(index));
    }

    pub fn is_available(&self) -> bool {
        self.index.read().is_some()
    }

    /// Current index, if a document has been loaded.
    pub fn snapshot(&self) -> Option<Arc<DocumentIndex>> {
        self.index.read().clone()
    }

    pub fn fetch_whole(&self) -> WholeDocument {
        match self.snapshot() {
            Some(index) => WholeDocument {
                text: Some(index.text().to_string()),
                available: true,
            },
            None => WholeDocument {
                text: None,
                available: false,
            },
        }
    }

    pub fn search(&self, query: &str) -> SearchResult {
        match self.snapshot() {
            Some(index) => index.search(query),
            None => engine::search(&[], None, query),
        }
    }
}
