use super::protocol::{
    TOOL_FETCH_DOCUMENTATION, TOOL_GET_EXAMPLES, TOOL_SEARCH_DOCUMENTATION, ToolArguments,
    ToolResponse,
};
use crate::catalog::get_examples;
use crate::search::error::DocsError;
use crate::search::store::DocumentStore;

/// Runs the named tool. Both transports go through here.
pub fn use_tool(store: &DocumentStore, tool_name: &str, arguments: &ToolArguments) -> ToolResponse {
    match tool_name {
        TOOL_FETCH_DOCUMENTATION => fetch_documentation(store),
        TOOL_SEARCH_DOCUMENTATION => {
            search_documentation(store, arguments.query.as_deref().unwrap_or(""))
        }
        TOOL_GET_EXAMPLES => {
            ToolResponse::success(&get_examples(arguments.kind.as_deref().unwrap_or("")))
        }
        other => {
            tracing::warn!("Unknown tool requested: {}", other);
            ToolResponse::error(format!("Unknown tool: {}", other))
        }
    }
}

fn fetch_documentation(store: &DocumentStore) -> ToolResponse {
    match store.fetch_whole().text {
        Some(text) => ToolResponse::success(&text),
        None => ToolResponse::error(DocsError::DocumentUnavailable.to_string()),
    }
}

fn search_documentation(store: &DocumentStore, query: &str) -> ToolResponse {
    match store.search(query) {
        Ok(hits) => ToolResponse::success(&hits),
        Err(e) => {
            tracing::debug!("Search for {:?} failed: {}", query, e);
            ToolResponse::error(e.to_string())
        }
    }
}
