use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use nasa_explorer_core::nasa::{
    display_date, project_list, ListQuery, MediaRecord, SortKey, SortOrder,
};
use nasa_explorer_core::pagination::PageInfo;
use serde::Serialize;

use super::{quote_arg, search};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Search query sent to the NASA Images API (defaults to "apollo" when blank)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Only show results whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Sort key: title or date
    #[arg(short, long, default_value = "title")]
    pub sort: SortKey,

    /// Sort order: asc or desc
    #[arg(short, long, default_value = "asc")]
    pub order: SortOrder,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            filter: self.filter.clone(),
            sort_key: self.sort,
            order: self.order,
            page: self.page,
        }
    }
}

/// Complete list output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub query: String,
    pub filter: String,
    pub sort: SortKey,
    pub order: SortOrder,
    pub items: Vec<MediaRecord>,
    pub pagination: PageInfo,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching results for '{}'...", options.query);
    }

    let output = list_data(&global, &options.query, options.list_query()).await?;

    if options.json {
        println!("{}", format_list_json(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Fetches search results and returns the requested list page
pub async fn list_data(global: &crate::Global, query: &str, list: ListQuery) -> Result<ListOutput> {
    let results = search(global, query, None).await?;
    Ok(build_list_output(query, &results, list))
}

pub fn build_list_output(query: &str, results: &[MediaRecord], list: ListQuery) -> ListOutput {
    let page = project_list(results, &list);
    ListOutput {
        query: query.to_string(),
        filter: list.filter,
        sort: list.sort_key,
        order: list.order,
        items: page.items,
        pagination: page.pagination,
    }
}

fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert list output to formatted text with colors
pub fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;
    let query = quote_arg(&output.query);

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "NASA LIST VIEW (Page {} of {})",
            pagination.current_page, pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!(
        "{}: {} | {}: {} {}",
        "Sort".green(),
        output.sort.as_str(),
        "Order".green(),
        output.order.as_str(),
        if output.filter.is_empty() {
            String::new()
        } else {
            format!("| {}: {}", "Filter".green(), output.filter)
        }
    ));
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No results on this page.".yellow()));
    } else {
        for (idx, item) in output.items.iter().enumerate() {
            let title = if item.title.is_empty() {
                "(No title)"
            } else {
                item.title.as_str()
            };
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                title.white().bold()
            ));
            result.push_str(&format!(
                "    {}: {} | {}: {} | {}: {}\n",
                "Date".green(),
                display_date(&item.date_created).bright_white(),
                "Type".green(),
                item.media_type.bright_magenta(),
                "ID".green(),
                item.nasa_id.bright_black()
            ));
            if !item.thumbnail.is_empty() {
                result.push_str(&format!(
                    "    {}: {}\n",
                    "Thumbnail".green(),
                    item.thumbnail.cyan().underline()
                ));
            }
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.to_string().bright_cyan().bold(),
        pagination.total_items.to_string().bright_cyan().bold(),
        "matching results".bright_white(),
    ));

    let mut args = format!(
        "{query} --sort {} --order {}",
        output.sort.as_str(),
        output.order.as_str()
    );
    if !output.filter.is_empty() {
        args.push_str(&format!(" --filter {}", quote_arg(&output.filter)));
    }
    let base = format!("nasa-explorer list {args}");

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if pagination.has_next() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Next page".green(),
            format!("{base} --page {}", pagination.current_page + 1).cyan()
        ));
    }
    if pagination.has_prev() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Previous page".green(),
            format!("{base} --page {}", pagination.current_page - 1).cyan()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To open an item".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        format!(
            "nasa-explorer detail {args} --page {} --position <n>",
            pagination.current_page
        )
        .cyan()
    ));

    result.push_str(&format!("\n{}:\n", "To get JSON output".bright_white().bold()));
    result.push_str(&format!("  {}\n", format!("{base} --json").cyan()));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, date: &str, media_type: &str) -> MediaRecord {
        MediaRecord {
            nasa_id: id.to_string(),
            title: title.to_string(),
            description: "No description available.".to_string(),
            date_created: date.to_string(),
            media_type: media_type.to_string(),
            thumbnail: format!("https://images-assets.nasa.gov/image/{id}/{id}~thumb.jpg"),
        }
    }

    fn sample() -> Vec<MediaRecord> {
        vec![
            record("mars", "Mars Rover", "2021-02-18T00:00:00Z", "video"),
            record("as11", "Apollo 11", "1969-07-20T00:00:00Z", "image"),
        ]
    }

    #[test]
    fn test_build_list_output_sorts_titles() {
        let output = build_list_output("apollo", &sample(), ListQuery::default());

        let titles: Vec<&str> = output.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Apollo 11", "Mars Rover"]);
        assert_eq!(output.pagination.total_pages, 1);
    }

    #[test]
    fn test_format_list_json_structure() {
        let output = build_list_output("apollo", &sample(), ListQuery::default());

        let json = format_list_json(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["query"], "apollo");
        assert_eq!(parsed["sort"], "title");
        assert_eq!(parsed["order"], "asc");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["items"][0]["nasa_id"], "as11");
        assert_eq!(parsed["pagination"]["total_items"], 2);
        assert!(parsed.get("source_indices").is_none());
    }

    #[test]
    fn test_format_list_text_basic() {
        let output = build_list_output("apollo", &sample(), ListQuery::default());

        let formatted = format_list_text(&output);

        assert!(formatted.contains("NASA LIST VIEW"));
        assert!(formatted.contains("Page 1 of 1"));
        assert!(formatted.contains("Apollo 11"));
        assert!(formatted.contains("1969-07-20"));
        assert!(formatted.contains("[2]"));
        assert!(!formatted.contains("Next page"));
        assert!(!formatted.contains("Previous page"));
    }

    #[test]
    fn test_format_list_text_empty() {
        let output = build_list_output(
            "apollo",
            &sample(),
            ListQuery {
                filter: "jupiter".to_string(),
                ..ListQuery::default()
            },
        );

        let formatted = format_list_text(&output);

        assert!(formatted.contains("No results on this page"));
        assert!(formatted.contains("--filter jupiter"));
    }

    #[test]
    fn test_format_list_text_middle_page() {
        let results: Vec<MediaRecord> = (0..40)
            .map(|i| record(&i.to_string(), &format!("Item {i:02}"), "2000-01-01", "image"))
            .collect();
        let output = build_list_output(
            "moon landing",
            &results,
            ListQuery {
                page: 2,
                ..ListQuery::default()
            },
        );

        let formatted = format_list_text(&output);

        assert!(formatted.contains("Next page"));
        assert!(formatted.contains("Previous page"));
        assert!(formatted.contains("nasa-explorer list 'moon landing'"));
        assert!(formatted.contains("--page 3"));
        assert!(formatted.contains("--page 1"));
    }
}
