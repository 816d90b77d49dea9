use crate::nasa::detail::Origin;
use crate::prelude::{eprintln, *};
use nasa_explorer_core::nasa::{GalleryQuery, ListQuery, MediaType, SortKey, SortOrder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{CallToolResult, Content, JsonRpcError};

fn parse_args<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    // Tools with no required argument may be called without an arguments object
    let arguments = arguments.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

fn tool_result<T: Serialize>(data: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(data)
        .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

fn execution_error(e: color_eyre::eyre::Report) -> JsonRpcError {
    JsonRpcError::internal(format!("Tool execution error: {e}"))
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    #[serde(default)]
    query: String,
    #[serde(default)]
    filter: String,
    sort: Option<SortKey>,
    order: Option<SortOrder>,
    page: Option<usize>,
}

pub async fn handle_nasa_list(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: ListArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling nasa_list: query={}, filter={}, sort={:?}, order={:?}, page={:?}",
            args.query, args.filter, args.sort, args.order, args.page
        );
    }

    let list = ListQuery {
        filter: args.filter,
        sort_key: args.sort.unwrap_or_default(),
        order: args.order.unwrap_or_default(),
        page: args.page.unwrap_or(1),
    };

    let output = crate::nasa::list::list_data(global, &args.query, list)
        .await
        .map_err(execution_error)?;

    tool_result(&output)
}

#[derive(Debug, Deserialize)]
struct GalleryArgs {
    #[serde(default)]
    query: String,
    media_type: Option<MediaType>,
    #[serde(default)]
    filter: String,
    page: Option<usize>,
}

pub async fn handle_nasa_gallery(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: GalleryArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling nasa_gallery: query={}, media_type={:?}, filter={}, page={:?}",
            args.query, args.media_type, args.filter, args.page
        );
    }

    let gallery = GalleryQuery {
        media_type: args.media_type.unwrap_or_default(),
        filter: args.filter,
        page: args.page.unwrap_or(1),
    };

    let output = crate::nasa::gallery::gallery_data(global, &args.query, gallery)
        .await
        .map_err(execution_error)?;

    tool_result(&output)
}

#[derive(Debug, Deserialize)]
struct DetailArgs {
    #[serde(default)]
    query: String,
    position: usize,
    media_type: Option<MediaType>,
    #[serde(default)]
    filter: String,
    sort: Option<SortKey>,
    order: Option<SortOrder>,
    page: Option<usize>,
}

impl DetailArgs {
    fn origin(&self) -> Origin {
        let page = self.page.unwrap_or(1);
        match self.media_type {
            Some(media_type) => Origin::Gallery(GalleryQuery {
                media_type,
                filter: self.filter.clone(),
                page,
            }),
            None => Origin::List(ListQuery {
                filter: self.filter.clone(),
                sort_key: self.sort.unwrap_or_default(),
                order: self.order.unwrap_or_default(),
                page,
            }),
        }
    }
}

pub async fn handle_nasa_detail(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: DetailArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling nasa_detail: query={}, position={}, media_type={:?}, page={:?}",
            args.query, args.position, args.media_type, args.page
        );
    }

    let output =
        crate::nasa::detail::detail_data(global, &args.query, args.origin(), args.position)
            .await
            .map_err(execution_error)?;

    tool_result(&output)
}

#[derive(Debug, Deserialize)]
struct AssetArgs {
    nasa_id: String,
}

pub async fn handle_nasa_asset(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: AssetArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling nasa_asset: nasa_id={}", args.nasa_id);
    }

    if args.nasa_id.trim().is_empty() {
        return Err(JsonRpcError::invalid_params("nasa_id must not be empty"));
    }

    let output = crate::nasa::asset::asset_data(global, &args.nasa_id)
        .await
        .map_err(execution_error)?;

    tool_result(&output)
}
