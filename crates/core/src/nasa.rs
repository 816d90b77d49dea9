use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::{paginate, PageInfo, PAGE_SIZE};

/// Search term used when the user submits a blank query
pub const DEFAULT_QUERY: &str = "apollo";

/// Description shown for records the API returns without one
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Top-level response of the `search` endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchResponse {
    pub collection: SearchCollection,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchCollection {
    #[serde(default)]
    pub items: Vec<SearchItem>,
    #[serde(default)]
    pub metadata: Option<SearchMetadata>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchMetadata {
    #[serde(default)]
    pub total_hits: u64,
}

/// One raw search hit. The API nests the item fields in a single-element list.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchItem {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<MediaData>>,
    #[serde(default)]
    pub links: Option<Vec<MediaLink>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MediaData {
    pub nasa_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub date_created: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub center: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MediaLink {
    #[serde(default)]
    pub href: String,
    pub rel: Option<String>,
    pub render: Option<String>,
}

/// Response of the `asset/{nasa_id}` endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AssetResponse {
    pub collection: AssetCollection,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AssetCollection {
    #[serde(default)]
    pub items: Vec<AssetItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AssetItem {
    pub href: String,
}

/// Canonical flat record derived from exactly one raw search item
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub nasa_id: String,
    pub title: String,
    pub description: String,
    pub date_created: String,
    pub media_type: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Malformed record {0}: item has no data entry")]
    MalformedRecord(String),
}

/// Media types the gallery can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Audio,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    pub fn matches(self, record: &MediaRecord) -> bool {
        record.media_type == self.as_str()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "images" => Ok(MediaType::Image),
            "video" | "videos" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            other => Err(format!(
                "Invalid media type: {other}. Valid types: image, video, audio"
            )),
        }
    }
}

/// Field the list view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Title,
    DateCreated,
}

impl SortKey {
    /// Lower-cased comparison value of `record` for this key
    pub fn key(self, record: &MediaRecord) -> String {
        match self {
            SortKey::Title => record.title.to_lowercase(),
            SortKey::DateCreated => record.date_created.to_lowercase(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::DateCreated => "date",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "date" | "date_created" => Ok(SortKey::DateCreated),
            other => Err(format!("Invalid sort key: {other}. Valid keys: title, date")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order: {other}. Valid orders: asc, desc")),
        }
    }
}

/// Controls of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: String,
    pub sort_key: SortKey,
    pub order: SortOrder,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_key: SortKey::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

/// Controls of the gallery view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    pub media_type: MediaType,
    pub filter: String,
    pub page: usize,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            media_type: MediaType::default(),
            filter: String::new(),
            page: 1,
        }
    }
}

/// One page of a projection
///
/// `source_indices[i]` is the position of `items[i]` in the result set the
/// page was projected from, so a selection on the page can be turned into a
/// navigation snapshot over the full set.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<MediaRecord>,
    #[serde(skip)]
    pub source_indices: Vec<usize>,
    pub pagination: PageInfo,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index in the full result set of the record shown at `position` on this page
    pub fn absolute_index(&self, position: usize) -> Option<usize> {
        self.source_indices.get(position).copied()
    }
}

/// Trim the user's query, falling back to [`DEFAULT_QUERY`] when it is blank
pub fn resolve_query(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Query-string parameters for a search request
pub fn search_params(query: &str, media_type: Option<MediaType>) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", resolve_query(query))];
    if let Some(media_type) = media_type {
        params.push(("media_type", media_type.as_str().to_string()));
    }
    params
}

/// Convert one raw search item into a [`MediaRecord`]
///
/// The first `data` entry supplies the fields and the first `links` entry the
/// thumbnail. Only the description is defaulted; other missing fields become
/// empty strings. An item without any `data` entry is rejected.
pub fn normalize_item(item: SearchItem) -> Result<MediaRecord, NormalizeError> {
    let SearchItem { href, data, links } = item;

    let Some(data) = data.and_then(|d| d.into_iter().next()) else {
        return Err(NormalizeError::MalformedRecord(
            href.unwrap_or_else(|| "(no href)".to_string()),
        ));
    };

    let thumbnail = links
        .and_then(|l| l.into_iter().next())
        .map(|link| link.href)
        .unwrap_or_default();

    let description = data
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

    Ok(MediaRecord {
        nasa_id: data.nasa_id.unwrap_or_default(),
        title: data.title.unwrap_or_default(),
        description,
        date_created: data.date_created.unwrap_or_default(),
        media_type: data.media_type.unwrap_or_default(),
        thumbnail,
    })
}

/// Normalize every item of a search response, keeping fetch order
///
/// Items that cannot be normalized are returned separately so the caller can
/// report them; they never appear as partial records.
pub fn transform_search_response(
    response: SearchResponse,
) -> (Vec<MediaRecord>, Vec<NormalizeError>) {
    let mut records = Vec::with_capacity(response.collection.items.len());
    let mut rejected = Vec::new();

    for item in response.collection.items {
        match normalize_item(item) {
            Ok(record) => records.push(record),
            Err(e) => rejected.push(e),
        }
    }

    (records, rejected)
}

/// Flatten an asset manifest into its file URLs
pub fn transform_asset_manifest(response: AssetResponse) -> Vec<String> {
    response
        .collection
        .items
        .into_iter()
        .map(|item| item.href)
        .collect()
}

fn title_matches(record: &MediaRecord, needle: &str) -> bool {
    needle.is_empty() || record.title.to_lowercase().contains(needle)
}

fn build_page(matches: Vec<(usize, &MediaRecord)>, page: usize) -> Page {
    let pagination = PageInfo::new(page, matches.len(), PAGE_SIZE);
    let slice = paginate(&matches, page, PAGE_SIZE);

    Page {
        items: slice.iter().map(|(_, r)| (*r).clone()).collect(),
        source_indices: slice.iter().map(|(i, _)| *i).collect(),
        pagination,
    }
}

/// List view: title filter, stable sort, then pagination
///
/// Records with equal sort keys keep their relative order from `results` in
/// both directions.
pub fn project_list(results: &[MediaRecord], query: &ListQuery) -> Page {
    let needle = query.filter.to_lowercase();

    let mut keyed: Vec<(String, usize, &MediaRecord)> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| title_matches(r, &needle))
        .map(|(i, r)| (query.sort_key.key(r), i, r))
        .collect();

    // `sort_by` is stable, and reversing an `Equal` ordering leaves it `Equal`.
    keyed.sort_by(|a, b| match query.order {
        SortOrder::Asc => a.0.cmp(&b.0),
        SortOrder::Desc => b.0.cmp(&a.0),
    });

    let matches = keyed.into_iter().map(|(_, i, r)| (i, r)).collect();
    build_page(matches, query.page)
}

/// Gallery view: exact media-type match, title filter, then pagination in fetch order
pub fn project_gallery(results: &[MediaRecord], query: &GalleryQuery) -> Page {
    let needle = query.filter.to_lowercase();

    let matches = results
        .iter()
        .enumerate()
        .filter(|(_, r)| query.media_type.matches(r))
        .filter(|(_, r)| title_matches(r, &needle))
        .collect();

    build_page(matches, query.page)
}

/// Calendar date of a `date_created` value for display
///
/// RFC 3339 timestamps are reformatted as `YYYY-MM-DD`; anything else is cut
/// to its first ten characters.
pub fn display_date(date_created: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_created) {
        return dt.format("%Y-%m-%d").to_string();
    }
    date_created.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, date: &str, media_type: &str) -> MediaRecord {
        MediaRecord {
            nasa_id: format!("id-{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            description: DESCRIPTION_PLACEHOLDER.to_string(),
            date_created: date.to_string(),
            media_type: media_type.to_string(),
            thumbnail: String::new(),
        }
    }

    fn sample() -> Vec<MediaRecord> {
        vec![
            record("Apollo 11", "1969-07-20", "image"),
            record("Mars Rover", "2021-02-18", "video"),
        ]
    }

    fn titles(page: &Page) -> Vec<&str> {
        page.items.iter().map(|r| r.title.as_str()).collect()
    }

    fn raw_item(json: serde_json::Value) -> SearchItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_normalize_item_full() {
        let item = raw_item(serde_json::json!({
            "href": "https://images-assets.nasa.gov/image/as11-40-5874/collection.json",
            "data": [{
                "nasa_id": "as11-40-5874",
                "title": "Apollo 11 Mission image",
                "description": "Astronaut Edwin Aldrin on the Moon",
                "media_type": "image",
                "date_created": "1969-07-20T00:00:00Z",
                "center": "JSC",
                "keywords": ["APOLLO 11"]
            }],
            "links": [
                {"href": "https://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~thumb.jpg", "rel": "preview", "render": "image"},
                {"href": "https://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~orig.jpg", "rel": "canonical"}
            ]
        }));

        let record = normalize_item(item).unwrap();

        assert_eq!(record.nasa_id, "as11-40-5874");
        assert_eq!(record.title, "Apollo 11 Mission image");
        assert_eq!(record.description, "Astronaut Edwin Aldrin on the Moon");
        assert_eq!(record.media_type, "image");
        assert_eq!(record.date_created, "1969-07-20T00:00:00Z");
        assert_eq!(
            record.thumbnail,
            "https://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~thumb.jpg"
        );
    }

    #[test]
    fn test_normalize_item_without_links_has_empty_thumbnail() {
        let item = raw_item(serde_json::json!({
            "data": [{"nasa_id": "a", "title": "Audio", "media_type": "audio", "date_created": "2000-01-01"}]
        }));

        let record = normalize_item(item).unwrap();

        assert_eq!(record.thumbnail, "");
    }

    #[test]
    fn test_normalize_item_missing_description_uses_placeholder() {
        let item = raw_item(serde_json::json!({
            "data": [{"nasa_id": "a", "title": "No text", "media_type": "image", "date_created": "2000-01-01"}]
        }));

        let record = normalize_item(item).unwrap();

        assert_eq!(record.description, "No description available.");
    }

    #[test]
    fn test_normalize_item_empty_description_uses_placeholder() {
        let item = raw_item(serde_json::json!({
            "data": [{"nasa_id": "a", "title": "Blank", "description": "", "media_type": "image"}]
        }));

        let record = normalize_item(item).unwrap();

        assert_eq!(record.description, DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn test_normalize_item_missing_fields_pass_through_empty() {
        let item = raw_item(serde_json::json!({ "data": [{}] }));

        let record = normalize_item(item).unwrap();

        assert_eq!(record.nasa_id, "");
        assert_eq!(record.title, "");
        assert_eq!(record.date_created, "");
        assert_eq!(record.media_type, "");
    }

    #[test]
    fn test_normalize_item_without_data_is_malformed() {
        let missing = raw_item(serde_json::json!({ "href": "https://example.com/x.json" }));
        let empty = raw_item(serde_json::json!({ "data": [] }));

        assert_eq!(
            normalize_item(missing),
            Err(NormalizeError::MalformedRecord(
                "https://example.com/x.json".to_string()
            ))
        );
        assert!(normalize_item(empty).is_err());
    }

    #[test]
    fn test_transform_search_response_keeps_order_and_skips_malformed() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "collection": {
                "version": "1.0",
                "href": "https://images-api.nasa.gov/search?q=apollo",
                "items": [
                    {"data": [{"nasa_id": "b", "title": "Second"}]},
                    {"data": []},
                    {"data": [{"nasa_id": "a", "title": "First"}]}
                ],
                "metadata": {"total_hits": 3}
            }
        }))
        .unwrap();

        let (records, rejected) = transform_search_response(response);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].nasa_id, "b");
        assert_eq!(records[1].nasa_id, "a");
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn test_transform_asset_manifest() {
        let response: AssetResponse = serde_json::from_value(serde_json::json!({
            "collection": {
                "version": "1.0",
                "href": "https://images-api.nasa.gov/asset/as11-40-5874",
                "items": [
                    {"href": "http://images-assets.nasa.gov/image/as11-40-5874/as11-40-5874~orig.jpg"},
                    {"href": "http://images-assets.nasa.gov/image/as11-40-5874/metadata.json"}
                ]
            }
        }))
        .unwrap();

        let hrefs = transform_asset_manifest(response);

        assert_eq!(hrefs.len(), 2);
        assert!(hrefs[0].ends_with("~orig.jpg"));
        assert!(hrefs[1].ends_with("metadata.json"));
    }

    #[test]
    fn test_resolve_query() {
        assert_eq!(resolve_query(""), "apollo");
        assert_eq!(resolve_query("   "), "apollo");
        assert_eq!(resolve_query("  mars  "), "mars");
    }

    #[test]
    fn test_search_params() {
        assert_eq!(search_params("", None), vec![("q", "apollo".to_string())]);
        assert_eq!(
            search_params("moon", Some(MediaType::Video)),
            vec![("q", "moon".to_string()), ("media_type", "video".to_string())]
        );
    }

    #[test]
    fn test_project_list_ascending_and_descending() {
        let results = sample();

        let asc = project_list(&results, &ListQuery::default());
        assert_eq!(titles(&asc), vec!["Apollo 11", "Mars Rover"]);

        let desc = project_list(
            &results,
            &ListQuery {
                order: SortOrder::Desc,
                ..ListQuery::default()
            },
        );
        assert_eq!(titles(&desc), vec!["Mars Rover", "Apollo 11"]);
    }

    #[test]
    fn test_project_list_filter_is_case_insensitive() {
        let results = vec![
            record("Apollo 11", "1969-07-20", "image"),
            record("Mars Rover", "2021-02-18", "video"),
            record("APOLLO 13", "1970-04-11", "image"),
            record("Gemini", "1965-03-23", "image"),
        ];

        let page = project_list(
            &results,
            &ListQuery {
                filter: "aPoLlO".to_string(),
                ..ListQuery::default()
            },
        );

        assert_eq!(titles(&page), vec!["Apollo 11", "APOLLO 13"]);
        assert_eq!(page.pagination.total_items, 2);
    }

    #[test]
    fn test_project_list_sort_by_date() {
        let results = vec![
            record("B", "2021-02-18", "image"),
            record("A", "1969-07-20", "image"),
            record("C", "1970-04-11", "image"),
        ];

        let page = project_list(
            &results,
            &ListQuery {
                sort_key: SortKey::DateCreated,
                ..ListQuery::default()
            },
        );

        assert_eq!(titles(&page), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_project_list_sort_is_stable() {
        let mut results = Vec::new();
        for (i, title) in ["Moon", "moon", "Earth", "MOON", "earth"].iter().enumerate() {
            let mut r = record(title, "2000-01-01", "image");
            r.nasa_id = i.to_string();
            results.push(r);
        }

        let asc = project_list(&results, &ListQuery::default());
        let asc_ids: Vec<&str> = asc.items.iter().map(|r| r.nasa_id.as_str()).collect();
        assert_eq!(asc_ids, vec!["2", "4", "0", "1", "3"]);

        let desc = project_list(
            &results,
            &ListQuery {
                order: SortOrder::Desc,
                ..ListQuery::default()
            },
        );
        let desc_ids: Vec<&str> = desc.items.iter().map(|r| r.nasa_id.as_str()).collect();
        assert_eq!(desc_ids, vec!["0", "1", "3", "2", "4"]);
    }

    #[test]
    fn test_project_list_pagination() {
        let results: Vec<MediaRecord> = (0..32)
            .map(|i| record(&format!("Item {i:02}"), "2000-01-01", "image"))
            .collect();

        let first = project_list(&results, &ListQuery::default());
        assert_eq!(first.items.len(), 15);
        assert_eq!(first.pagination.total_pages, 3);
        assert_eq!(first.items[0].title, "Item 00");

        let third = project_list(
            &results,
            &ListQuery {
                page: 3,
                ..ListQuery::default()
            },
        );
        assert_eq!(titles(&third), vec!["Item 30", "Item 31"]);

        let beyond = project_list(
            &results,
            &ListQuery {
                page: 4,
                ..ListQuery::default()
            },
        );
        assert!(beyond.is_empty());
        assert_eq!(beyond.pagination.total_pages, 3);
    }

    #[test]
    fn test_project_list_empty_filter_result() {
        let page = project_list(
            &sample(),
            &ListQuery {
                filter: "jupiter".to_string(),
                ..ListQuery::default()
            },
        );

        assert!(page.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_project_list_absolute_index() {
        let results = vec![
            record("Zeta", "2000-01-01", "image"),
            record("Alpha", "2000-01-01", "image"),
        ];

        let page = project_list(&results, &ListQuery::default());

        assert_eq!(page.items[0].title, "Alpha");
        assert_eq!(page.absolute_index(0), Some(1));
        assert_eq!(page.absolute_index(1), Some(0));
        assert_eq!(page.absolute_index(2), None);
    }

    #[test]
    fn test_project_gallery_filters_media_type() {
        let page = project_gallery(
            &sample(),
            &GalleryQuery {
                media_type: MediaType::Video,
                ..GalleryQuery::default()
            },
        );

        assert_eq!(titles(&page), vec!["Mars Rover"]);
        assert!(page.items.iter().all(|r| r.media_type == "video"));
    }

    #[test]
    fn test_project_gallery_keeps_fetch_order_and_filters_title() {
        let results = vec![
            record("Saturn V", "1967-11-09", "image"),
            record("Apollo 11", "1969-07-20", "image"),
            record("Apollo launch", "1969-07-16", "video"),
            record("Apollo 8", "1968-12-21", "image"),
        ];

        let page = project_gallery(
            &results,
            &GalleryQuery {
                filter: "apollo".to_string(),
                ..GalleryQuery::default()
            },
        );

        assert_eq!(titles(&page), vec!["Apollo 11", "Apollo 8"]);
        assert_eq!(page.source_indices, vec![1, 3]);
    }

    #[test]
    fn test_project_gallery_pagination() {
        let results: Vec<MediaRecord> = (0..20)
            .map(|i| {
                let kind = if i % 2 == 0 { "image" } else { "video" };
                record(&format!("Item {i}"), "2000-01-01", kind)
            })
            .collect();

        let page = project_gallery(&results, &GalleryQuery::default());

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.total_pages, 1);

        let beyond = project_gallery(
            &results,
            &GalleryQuery {
                page: 2,
                ..GalleryQuery::default()
            },
        );
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_media_type_parsing() {
        assert_eq!("image".parse::<MediaType>(), Ok(MediaType::Image));
        assert_eq!("Videos".parse::<MediaType>(), Ok(MediaType::Video));
        assert_eq!("audio".parse::<MediaType>(), Ok(MediaType::Audio));
        assert!("model".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_sort_key_and_order_parsing() {
        assert_eq!("date".parse::<SortKey>(), Ok(SortKey::DateCreated));
        assert_eq!("date_created".parse::<SortKey>(), Ok(SortKey::DateCreated));
        assert_eq!("TITLE".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
        assert!("size".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("1969-07-20T00:00:00Z"), "1969-07-20");
        assert_eq!(display_date("2021-02-18T12:30:00.000+00:00"), "2021-02-18");
        assert_eq!(display_date("1969-07-20"), "1969-07-20");
        assert_eq!(display_date(""), "");
    }
}
