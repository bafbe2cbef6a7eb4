//! D2 Documentation Server Library
//!
//! This library crate defines the modules behind the `d2-docs-server` and `d2-docs-setup`
//! binaries: a retrieval service over the flat-text D2 language manual.
//!
//! ## Architecture Modules
//! - **`search`**: The core. Splits the manual into titled sections once at startup and
//!   answers free-text queries by title similarity, content containment and, failing
//!   both, sentence extraction.
//! - **`catalog`**: A fixed table of D2 code examples, independent of the manual.
//! - **`mcp`**: Tool dispatch plus the HTTP and line-delimited stdio transports.
//! - **`ingestion`**: Locates the manual on disk and keeps a service-local copy.
//! - **`config`**: Command-line and environment settings.

pub mod catalog;
pub mod config;
pub mod ingestion;
pub mod mcp;
pub mod search;
