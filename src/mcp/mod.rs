//! Tool Transport Module
//!
//! Exposes the documentation tools to clients over two transports that share one dispatcher.
//!
//! ## Transports
//! - **HTTP**: `POST /use_tool` runs a tool, `GET /manifest` describes them (Axum).
//! - **Stdio**: one JSON request per stdin line, one JSON response per stdout line.
//!
//! ## Submodules
//! - **`protocol`**: Endpoints, tool names, DTOs and the manifest.
//! - **`dispatch`**: Maps a tool name and its arguments onto the search core and the catalog.
//! - **`handlers`**: Axum router and HTTP handlers.
//! - **`stdio`**: The line-delimited transport loop.

pub mod dispatch;
pub mod handlers;
pub mod protocol;
pub mod stdio;
