mod nasa;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "nasa-explorer".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "nasa_list".to_string(),
            description: "Search the NASA Images API and return one page of results as a list. Results can be filtered by title (case-insensitive substring), sorted by title or creation date in either order, and paged 15 items at a time. A blank query searches for 'apollo'.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (e.g., 'apollo 11', 'mars rover')"
                    },
                    "filter": {
                        "type": "string",
                        "description": "Only keep results whose title contains this text (case-insensitive)"
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort key (default: title)",
                        "enum": ["title", "date_created"]
                    },
                    "order": {
                        "type": "string",
                        "description": "Sort order (default: asc)",
                        "enum": ["asc", "desc"]
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number, 1-indexed (default: 1)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "nasa_gallery".to_string(),
            description: "Search the NASA Images API and return one page of results of a single media type. Results keep the order returned by the API and can be filtered by title.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (e.g., 'nebula')"
                    },
                    "media_type": {
                        "type": "string",
                        "description": "Media type shown in the gallery (default: image)",
                        "enum": ["image", "video", "audio"]
                    },
                    "filter": {
                        "type": "string",
                        "description": "Only keep results whose title contains this text (case-insensitive)"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number, 1-indexed (default: 1)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "nasa_detail".to_string(),
            description: "Open one search result in detail, together with its previous and next neighbours in the full result set. The item is picked by its 1-indexed position on a list page, or on a gallery page when media_type is given. Pass the same query, filter, sort, order and page that produced that page.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "position": {
                        "type": "number",
                        "description": "Position of the item on the page, 1-indexed"
                    },
                    "media_type": {
                        "type": "string",
                        "description": "Pick the item from this gallery instead of the list",
                        "enum": ["image", "video", "audio"]
                    },
                    "filter": {
                        "type": "string",
                        "description": "Title filter of the originating page"
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort key of the originating list (default: title)",
                        "enum": ["title", "date_created"]
                    },
                    "order": {
                        "type": "string",
                        "description": "Sort order of the originating list (default: asc)",
                        "enum": ["asc", "desc"]
                    },
                    "page": {
                        "type": "number",
                        "description": "Page of the originating view, 1-indexed (default: 1)"
                    }
                },
                "required": ["position"]
            }),
        },
        Tool {
            name: "nasa_asset".to_string(),
            description: "List the file URLs (original, resized renditions, captions, metadata) behind one NASA media item.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "nasa_id": {
                        "type": "string",
                        "description": "NASA media identifier (e.g., 'as11-40-5874')"
                    }
                },
                "required": ["nasa_id"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "nasa_list" => nasa::handle_nasa_list(params.arguments, global).await,
        "nasa_gallery" => nasa::handle_nasa_gallery(params.arguments, global).await,
        "nasa_detail" => nasa::handle_nasa_detail(params.arguments, global).await,
        "nasa_asset" => nasa::handle_nasa_asset(params.arguments, global).await,
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
