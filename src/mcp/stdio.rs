use super::dispatch::use_tool;
use super::protocol::{
    MESSAGE_MANIFEST, MESSAGE_USE_TOOL, StdioRequest, StdioResponse, ToolResponse, manifest,
};
use crate::search::store::DocumentStore;
use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serves the line-delimited protocol on the process's stdin/stdout.
pub async fn serve_stdio(store: &DocumentStore) -> Result<()> {
    serve(store, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Reads one JSON request per line from `reader` and writes one JSON response
/// per line to `writer` until EOF. Blank lines are skipped; a line that is not
/// valid UTF-8 is answered as invalid JSON and the loop keeps going.
pub async fn serve<R, W>(store: &DocumentStore, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.split(b'\n');

    while let Some(raw) = lines.next_segment().await? {
        let response = match std::str::from_utf8(&raw) {
            Ok(line) => {
                let line = line.strip_suffix('\r').unwrap_or(line);
                if line.trim().is_empty() {
                    continue;
                }
                handle_line(store, line)
            }
            Err(e) => {
                tracing::error!("Error decoding message: {}", e);
                invalid_message(unknown_id())
            }
        };

        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');

        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
    }

    tracing::info!("Stdin closed, stopping stdio transport");
    Ok(())
}

/// Answers a single protocol line.
pub fn handle_line(store: &DocumentStore, line: &str) -> StdioResponse {
    let request: StdioRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Error parsing message: {}", e);
            return invalid_message(salvage_id(line));
        }
    };

    match request.kind.as_deref() {
        Some(MESSAGE_MANIFEST) => StdioResponse::reply(request.id, ToolResponse::success(&manifest())),
        Some(MESSAGE_USE_TOOL) => {
            let arguments = request.arguments.unwrap_or_default();
            let tool_name = request.tool_name.as_deref().unwrap_or("");
            StdioResponse::reply(request.id, use_tool(store, tool_name, &arguments))
        }
        other => {
            let id = if request.id.is_null() {
                unknown_id()
            } else {
                request.id
            };
            StdioResponse::reply(
                id,
                ToolResponse::error(format!("Unknown message type: {}", other.unwrap_or(""))),
            )
        }
    }
}

fn invalid_message(id: Value) -> StdioResponse {
    StdioResponse::reply(id, ToolResponse::error("Invalid JSON message"))
}

/// Recovers the `id` of a line that is JSON but not a well-formed request.
fn salvage_id(line: &str) -> Value {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|value| value.get("id").cloned())
        .filter(|id| !id.is_null())
        .unwrap_or_else(unknown_id)
}

fn unknown_id() -> Value {
    Value::String("unknown".to_string())
}
