use super::dispatch::use_tool;
use super::protocol::{
    ENDPOINT_MANIFEST, ENDPOINT_USE_TOOL, Manifest, ToolResponse, UseToolRequest, manifest,
};
use crate::search::store::DocumentStore;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// HTTP router serving the tool endpoints against `store`.
pub fn build_router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route(ENDPOINT_USE_TOOL, post(handle_use_tool))
        .route(ENDPOINT_MANIFEST, get(handle_manifest))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
}

pub async fn handle_use_tool(
    Extension(store): Extension<Arc<DocumentStore>>,
    Json(req): Json<UseToolRequest>,
) -> Json<ToolResponse> {
    tracing::debug!("HTTP tool call: {}", req.tool_name);
    let arguments = req.arguments.unwrap_or_default();
    Json(use_tool(&store, &req.tool_name, &arguments))
}

pub async fn handle_manifest() -> Json<Manifest> {
    Json(manifest())
}
