//! Tool Protocol Definitions
//!
//! Endpoints, tool names and the Data Transfer Objects shared by the HTTP and stdio
//! transports, plus the static manifest advertising the available tools.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// --- Identity ---

pub const SERVER_NAME: &str = "d2-diagram-documentation";
pub const SERVER_VERSION: &str = "1.0.0";
pub const SCHEMA_VERSION: &str = "1.0.0";
pub const SERVER_DESCRIPTION: &str =
    "MCP server for retrieving and searching D2 diagram documentation";

// --- API Endpoints ---

/// Public endpoint for tool invocations.
pub const ENDPOINT_USE_TOOL: &str = "/use_tool";
/// Public endpoint describing the available tools.
pub const ENDPOINT_MANIFEST: &str = "/manifest";

// --- Tools and message types ---

pub const TOOL_FETCH_DOCUMENTATION: &str = "fetch_d2_documentation";
pub const TOOL_SEARCH_DOCUMENTATION: &str = "search_d2_documentation";
pub const TOOL_GET_EXAMPLES: &str = "get_d2_examples";

pub const MESSAGE_MANIFEST: &str = "manifest";
pub const MESSAGE_USE_TOOL: &str = "use_tool";

// --- Data Transfer Objects ---

/// Arguments accepted by the tools. Each tool reads only the field it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolArguments {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /use_tool`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UseToolRequest {
    pub tool_name: String,
    #[serde(default)]
    pub arguments: Option<ToolArguments>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Outcome of a tool call: a status plus either the payload or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub status: ResponseStatus,
    pub result: Value,
}

impl ToolResponse {
    pub fn success<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(result) => Self {
                status: ResponseStatus::Success,
                result,
            },
            Err(e) => {
                tracing::error!("Failed to serialize tool result: {}", e);
                Self::error("Failed to serialize result")
            }
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            result: Value::String(message.into()),
        }
    }
}

/// One line read by the stdio transport.
#[derive(Debug, Deserialize)]
pub struct StdioRequest {
    #[serde(default)]
    pub id: Value,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub arguments: Option<ToolArguments>,
}

/// One line written by the stdio transport. The request `id` is echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdioResponse {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    pub status: ResponseStatus,
    pub result: Value,
}

impl StdioResponse {
    pub fn reply(id: Value, response: ToolResponse) -> Self {
        Self {
            id,
            status: response.status,
            result: response.result,
        }
    }
}

// --- Manifest ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub schema_version: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub tools: Vec<ToolDescriptor>,
    pub resources: Vec<Value>,
}

pub fn manifest() -> Manifest {
    Manifest {
        schema_version: SCHEMA_VERSION.to_string(),
        name: SERVER_NAME.to_string(),
        version: SERVER_VERSION.to_string(),
        description: SERVER_DESCRIPTION.to_string(),
        tools: vec![
            ToolDescriptor {
                name: TOOL_FETCH_DOCUMENTATION.to_string(),
                description: "Fetch entire documentation file from D2 diagrams. Useful for general questions. Always call this tool first if asked about D2 diagrams.".to_string(),
                input_schema: json!({ "type": "object" }),
            },
            ToolDescriptor {
                name: TOOL_SEARCH_DOCUMENTATION.to_string(),
                description: "Semantically search within the fetched documentation for D2 diagrams. Useful for specific queries.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search query to find relevant documentation"
                        }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                }),
            },
            ToolDescriptor {
                name: TOOL_GET_EXAMPLES.to_string(),
                description: "Retrieve example D2 diagram code for various diagram types".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "type": {
                            "type": "string",
                            "description": "The type of example to retrieve (basic, network, sketch, sql, variables, globs, animated)"
                        }
                    },
                    "additionalProperties": false
                }),
            },
        ],
        resources: Vec::new(),
    }
}
