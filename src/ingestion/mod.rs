//! Documentation Ingestion Module
//!
//! Produces the raw documentation text before any query is served.
//!
//! ## Workflow
//! 1. **Cache**: Reads the service-local copy of the manual if one exists.
//! 2. **Source**: Otherwise reads the original manual from its known location.
//! 3. **Copy**: Saves the source text as the new cache for later starts.
//!
//! A missing manual is not fatal: the server still starts and every query reports
//! the documentation as unavailable.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
