use std::sync::Arc;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use nasa_explorer_core::nasa::{
    display_date, project_gallery, project_list, GalleryQuery, ListQuery, MediaRecord, MediaType,
    SortKey, SortOrder,
};
use nasa_explorer_core::navigation::{Direction, NavigationInfo, Snapshot};
use serde::Serialize;

use super::{quote_arg, search};

#[derive(Debug, clap::Args, Clone)]
pub struct DetailOptions {
    /// Search query sent to the NASA Images API (defaults to "apollo" when blank)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Position of the item on the page, as numbered by `list` or `gallery` (1-indexed)
    #[arg(short = 'n', long, default_value = "1")]
    pub position: usize,

    /// Pick the item from this gallery instead of the list view
    #[arg(short, long, value_name = "TYPE")]
    pub gallery: Option<MediaType>,

    /// Title filter of the originating view
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Sort key of the originating list: title or date
    #[arg(short, long, default_value = "title")]
    pub sort: SortKey,

    /// Sort order of the originating list: asc or desc
    #[arg(short, long, default_value = "asc")]
    pub order: SortOrder,

    /// Page of the originating view (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// View the detail was opened from
#[derive(Debug, Clone)]
pub enum Origin {
    List(ListQuery),
    Gallery(GalleryQuery),
}

impl DetailOptions {
    pub fn origin(&self) -> Origin {
        match self.gallery {
            Some(media_type) => Origin::Gallery(GalleryQuery {
                media_type,
                filter: self.filter.clone(),
                page: self.page,
            }),
            None => Origin::List(ListQuery {
                filter: self.filter.clone(),
                sort_key: self.sort,
                order: self.order,
                page: self.page,
            }),
        }
    }
}

/// Title and identifier of an adjacent item
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Neighbour {
    pub nasa_id: String,
    pub title: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct DetailOutput {
    pub query: String,
    /// Index of the item in the fetched result set
    pub index: Option<usize>,
    pub item: Option<MediaRecord>,
    pub navigation: NavigationInfo,
    pub previous: Option<Neighbour>,
    pub next: Option<Neighbour>,
}

pub async fn run(options: DetailOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching results for '{}'...", options.query);
    }

    let output = detail_data(&global, &options.query, options.origin(), options.position).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_detail_text(&output));
    }

    Ok(())
}

/// Fetches search results and opens the item at `position` (1-indexed) of the originating page
pub async fn detail_data(
    global: &crate::Global,
    query: &str,
    origin: Origin,
    position: usize,
) -> Result<DetailOutput> {
    let results = search(global, query, None).await?;
    let snapshot = select(results, &origin, position);
    Ok(build_detail_output(query, snapshot.as_ref()))
}

/// Snapshot over `results` positioned on the item shown at `position` of the origin page
pub fn select(results: Vec<MediaRecord>, origin: &Origin, position: usize) -> Option<Snapshot> {
    let page = match origin {
        Origin::List(list) => project_list(&results, list),
        Origin::Gallery(gallery) => project_gallery(&results, gallery),
    };
    let index = page.absolute_index(position.checked_sub(1)?)?;
    Some(Snapshot::new(Arc::from(results), index))
}

fn neighbour(snapshot: &Snapshot, direction: Direction) -> Option<Neighbour> {
    let moved = snapshot.step(direction)?;
    let record = moved.current().ok()?;
    Some(Neighbour {
        nasa_id: record.nasa_id.clone(),
        title: record.title.clone(),
    })
}

pub fn build_detail_output(query: &str, snapshot: Option<&Snapshot>) -> DetailOutput {
    let Some(snapshot) = snapshot else {
        return DetailOutput {
            query: query.to_string(),
            index: None,
            item: None,
            navigation: Snapshot::empty().info(),
            previous: None,
            next: None,
        };
    };

    let item = snapshot.current().ok().cloned();
    DetailOutput {
        query: query.to_string(),
        index: item.as_ref().map(|_| snapshot.index()),
        item,
        navigation: snapshot.info(),
        previous: neighbour(snapshot, Direction::Previous),
        next: neighbour(snapshot, Direction::Next),
    }
}

pub fn format_detail_text(output: &DetailOutput) -> String {
    let mut result = String::new();

    let Some(item) = &output.item else {
        result.push_str(&format!("\n{}\n\n", "Item not found.".yellow()));
        return result;
    };

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        if item.title.is_empty() {
            "(No title)"
        } else {
            item.title.as_str()
        }
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "{}: {}\n",
        "Date".green(),
        display_date(&item.date_created).bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Type".green(),
        item.media_type.bright_magenta()
    ));
    result.push_str(&format!("{}: {}\n", "ID".green(), item.nasa_id.bright_white()));
    if !item.thumbnail.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Thumbnail".green(),
            item.thumbnail.cyan().underline()
        ));
    }
    result.push_str(&format!("\n{}\n", item.description));

    let nav = &output.navigation;
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));
    if let Some(position) = nav.position {
        result.push_str(&format!(
            "\n{} {} {} {}\n",
            "Item".bright_white(),
            position.to_string().bright_cyan().bold(),
            "of".bright_white(),
            nav.total.to_string().bright_cyan().bold(),
        ));
    }
    match &output.previous {
        Some(prev) => result.push_str(&format!(
            "  {}: {} ({})\n",
            "Previous".green(),
            prev.title,
            prev.nasa_id.bright_black()
        )),
        None => result.push_str(&format!("  {}: -\n", "Previous".green())),
    }
    match &output.next {
        Some(next) => result.push_str(&format!(
            "  {}: {} ({})\n",
            "Next".green(),
            next.title,
            next.nasa_id.bright_black()
        )),
        None => result.push_str(&format!("  {}: -\n", "Next".green())),
    }

    result.push_str(&format!("\n{}:\n", "To list the files".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        format!("nasa-explorer asset {}", quote_arg(&item.nasa_id)).cyan()
    ));

    result.push('\n');
    result
}
