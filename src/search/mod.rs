//! Documentation Search Module
//!
//! The core of the service: turns the raw documentation text into a section index and
//! answers free-text queries against it.
//!
//! ## Overview
//! The document is loaded once at startup, split at its Markdown headings and kept as an
//! immutable index. Queries never touch the filesystem; they run synchronously against
//! whatever index the `DocumentStore` currently publishes.
//!
//! ## Responsibilities
//! - **Sectioning**: Splitting the document into titled, non-overlapping spans.
//! - **Ranking**: Scoring sections by title similarity or content containment.
//! - **Fallback**: Extracting whole sentences when no section qualifies.
//!
//! ## Submodules
//! - **`sectionizer`**: Heading-based segmentation.
//! - **`similarity`**: Bigram (Dice) string similarity used for title scoring.
//! - **`engine`**: Ranking pass and sentence fallback.
//! - **`store`**: The loaded document and its index, shared with the transports.
//! - **`types`**: Sections and search results.
//! - **`error`**: Query failures reported to callers.

pub mod engine;
pub mod error;
pub mod sectionizer;
pub mod similarity;
pub mod store;
pub mod types;
