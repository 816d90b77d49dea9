use std::time::Duration;

use crate::prelude::{eprintln, *};
use nasa_explorer_core::nasa::{
    search_params, transform_asset_manifest, transform_search_response, AssetResponse,
    MediaRecord, MediaType, SearchResponse,
};
use serde::de::DeserializeOwned;

pub mod asset;
pub mod browse;
pub mod detail;
pub mod gallery;
pub mod list;

pub const DEFAULT_API_BASE: &str = "https://images-api.nasa.gov";

/// HTTP client configured from the global options
pub fn build_client(global: &crate::Global) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(global.timeout))
        .user_agent(concat!("nasa-explorer/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{path}", api_base.trim_end_matches('/'))
}

async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<T, FetchError> {
    let response = request.send().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.json::<T>().await.map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Run one search and normalize every returned item, in API order
///
/// A blank query is replaced with the default search term before the request
/// is sent. Items without any data entry are dropped and logged.
pub async fn fetch_results(
    client: &reqwest::Client,
    api_base: &str,
    query: &str,
    media_type: Option<MediaType>,
) -> Result<Vec<MediaRecord>, FetchError> {
    let url = endpoint(api_base, "search");
    let params = search_params(query, media_type);

    log::debug!("GET {url} {params:?}");

    let response: SearchResponse = get_json(client.get(&url).query(&params), &url).await?;
    let (records, rejected) = transform_search_response(response);

    for error in &rejected {
        log::warn!("Skipping search item: {error}");
    }
    log::info!("Fetched {} records from {url}", records.len());

    Ok(records)
}

/// `{api_base}/asset/{nasa_id}` with the id encoded as a single path segment
fn asset_url(api_base: &str, nasa_id: &str) -> Result<reqwest::Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: api_base.to_string(),
        reason,
    };

    let mut url = reqwest::Url::parse(api_base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .push("asset")
        .push(nasa_id);
    Ok(url)
}

/// Resolve the file URLs of one media item
pub async fn fetch_asset(
    client: &reqwest::Client,
    api_base: &str,
    nasa_id: &str,
) -> Result<Vec<String>, FetchError> {
    let url = asset_url(api_base, nasa_id)?;

    log::debug!("GET {url}");

    let response: AssetResponse = get_json(client.get(url.clone()), url.as_str()).await?;
    Ok(transform_asset_manifest(response))
}

/// Fetch with a client built from `global`
pub async fn search(
    global: &crate::Global,
    query: &str,
    media_type: Option<MediaType>,
) -> Result<Vec<MediaRecord>> {
    if global.verbose {
        eprintln!("NASA Images API Base: {}", global.api_base);
    }

    let client = build_client(global)?;
    Ok(fetch_results(&client, &global.api_base, query, media_type).await?)
}

/// Quote a query so it can be pasted back into a shell command
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    shlex::try_quote(arg)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_else(|_| arg.to_string())
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
