use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use nasa_explorer_core::nasa::{project_gallery, GalleryQuery, MediaRecord, MediaType};
use nasa_explorer_core::pagination::PageInfo;
use prettytable::{Cell, Row};
use serde::Serialize;

use super::{quote_arg, search, truncate_text};

/// Width of one gallery cell, including padding
const CELL_WIDTH: usize = 28;

#[derive(Debug, clap::Args, Clone)]
pub struct GalleryOptions {
    /// Search query sent to the NASA Images API (defaults to "apollo" when blank)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Media type shown in the gallery: image, video or audio
    #[arg(short = 't', long = "type", default_value = "image")]
    pub media_type: MediaType,

    /// Only show results whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GalleryOptions {
    pub fn gallery_query(&self) -> GalleryQuery {
        GalleryQuery {
            media_type: self.media_type,
            filter: self.filter.clone(),
            page: self.page,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct GalleryOutput {
    pub query: String,
    pub media_type: MediaType,
    pub filter: String,
    pub items: Vec<MediaRecord>,
    pub pagination: PageInfo,
}

pub async fn run(options: GalleryOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Fetching {} results for '{}'...",
            options.media_type, options.query
        );
    }

    let output = gallery_data(&global, &options.query, options.gallery_query()).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_gallery_text(&output, gallery_columns()));
    }

    Ok(())
}

/// Fetches search results and returns the requested gallery page
///
/// The full result set is fetched and the media type is applied locally, so
/// every view works on the same batch.
pub async fn gallery_data(
    global: &crate::Global,
    query: &str,
    gallery: GalleryQuery,
) -> Result<GalleryOutput> {
    let results = search(global, query, None).await?;
    Ok(build_gallery_output(query, &results, gallery))
}

pub fn build_gallery_output(
    query: &str,
    results: &[MediaRecord],
    gallery: GalleryQuery,
) -> GalleryOutput {
    let page = project_gallery(results, &gallery);
    GalleryOutput {
        query: query.to_string(),
        media_type: gallery.media_type,
        filter: gallery.filter,
        items: page.items,
        pagination: page.pagination,
    }
}

/// Number of gallery columns that fit the current terminal
pub fn gallery_columns() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| columns_for_width(w as usize))
        .unwrap_or(3)
}

fn columns_for_width(width: usize) -> usize {
    (width / CELL_WIDTH).clamp(1, 5)
}

pub fn format_gallery_text(output: &GalleryOutput, columns: usize) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "NASA GALLERY VIEW: {} (Page {} of {})",
            output.media_type.as_str().to_uppercase(),
            pagination.current_page,
            pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!(
            "\n{}\n",
            format!("No {} results on this page.", output.media_type).yellow()
        ));
    } else {
        let mut table = new_table();
        for (row_idx, chunk) in output.items.chunks(columns.max(1)).enumerate() {
            let cells = chunk
                .iter()
                .enumerate()
                .map(|(col_idx, item)| {
                    let position = row_idx * columns.max(1) + col_idx + 1;
                    Cell::new(&format!(
                        "[{position}] {}",
                        truncate_text(&item.title, CELL_WIDTH - 8)
                    ))
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format!(
        "\n{} {} {} {} ({} {} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.to_string().bright_cyan().bold(),
        pagination.total_items.to_string().bright_cyan().bold(),
        output.media_type.as_str().bright_white(),
        "results".bright_white(),
    ));

    let mut args = format!("{} --type {}", quote_arg(&output.query), output.media_type);
    if !output.filter.is_empty() {
        args.push_str(&format!(" --filter {}", quote_arg(&output.filter)));
    }

    if pagination.has_next() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Next page".green(),
            format!("nasa-explorer gallery {args} --page {}", pagination.current_page + 1).cyan()
        ));
    }
    if pagination.has_prev() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Previous page".green(),
            format!("nasa-explorer gallery {args} --page {}", pagination.current_page - 1).cyan()
        ));
    }
    let mut detail_args = format!("{} --gallery {}", quote_arg(&output.query), output.media_type);
    if !output.filter.is_empty() {
        detail_args.push_str(&format!(" --filter {}", quote_arg(&output.filter)));
    }
    result.push_str(&format!(
        "  {}: {}\n",
        "Open item".green(),
        format!(
            "nasa-explorer detail {detail_args} --page {} --position <n>",
            pagination.current_page
        )
        .cyan()
    ));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, media_type: &str) -> MediaRecord {
        MediaRecord {
            nasa_id: id.to_string(),
            title: title.to_string(),
            description: "No description available.".to_string(),
            date_created: "2000-01-01T00:00:00Z".to_string(),
            media_type: media_type.to_string(),
            thumbnail: String::new(),
        }
    }

    fn sample() -> Vec<MediaRecord> {
        vec![
            record("as11", "Apollo 11", "image"),
            record("mars", "Mars Rover", "video"),
            record("sound", "Apollo audio", "audio"),
        ]
    }

    #[test]
    fn test_build_gallery_output_video() {
        let output = build_gallery_output(
            "apollo",
            &sample(),
            GalleryQuery {
                media_type: MediaType::Video,
                ..GalleryQuery::default()
            },
        );

        assert_eq!(output.items.len(), 1);
        assert_eq!(output.items[0].title, "Mars Rover");
    }

    #[test]
    fn test_gallery_json_media_type_is_lowercase() {
        let output = build_gallery_output("apollo", &sample(), GalleryQuery::default());

        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["media_type"], "image");
        assert_eq!(json["items"][0]["nasa_id"], "as11");
    }

    #[test]
    fn test_format_gallery_text_grid() {
        let results: Vec<MediaRecord> = (0..7)
            .map(|i| record(&i.to_string(), &format!("Shot {i}"), "image"))
            .collect();
        let output = build_gallery_output("nebula", &results, GalleryQuery::default());

        let formatted = format_gallery_text(&output, 3);

        assert!(formatted.contains("NASA GALLERY VIEW: IMAGE"));
        assert!(formatted.contains("[1] Shot 0"));
        assert!(formatted.contains("[7] Shot 6"));
        assert!(formatted.contains("--gallery image"));
    }

    #[test]
    fn test_format_gallery_text_empty() {
        let output = build_gallery_output(
            "apollo",
            &[],
            GalleryQuery {
                media_type: MediaType::Video,
                ..GalleryQuery::default()
            },
        );

        let formatted = format_gallery_text(&output, 3);

        assert!(formatted.contains("No video results on this page."));
        assert!(!formatted.contains("Next page"));
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(10), 1);
        assert_eq!(columns_for_width(84), 3);
        assert_eq!(columns_for_width(400), 5);
    }
}
