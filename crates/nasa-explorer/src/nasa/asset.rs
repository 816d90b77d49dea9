use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;

use super::{build_client, fetch_asset};

#[derive(Debug, clap::Args, Clone)]
pub struct AssetOptions {
    /// NASA media identifier (e.g., "as11-40-5874")
    #[arg(value_name = "NASA_ID")]
    pub nasa_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct AssetOutput {
    pub nasa_id: String,
    pub files: Vec<String>,
}

pub async fn run(options: AssetOptions, global: crate::Global) -> Result<()> {
    let output = asset_data(&global, &options.nasa_id).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_asset_text(&output));
    }

    Ok(())
}

/// Fetches the asset manifest of one media item
pub async fn asset_data(global: &crate::Global, nasa_id: &str) -> Result<AssetOutput> {
    let nasa_id = nasa_id.trim();
    if nasa_id.is_empty() {
        return Err(eyre!("A NASA media identifier is required"));
    }

    if global.verbose {
        eprintln!("Fetching asset manifest for {}", nasa_id);
    }

    let client = build_client(global)?;
    let files = fetch_asset(&client, &global.api_base, nasa_id).await?;

    Ok(AssetOutput {
        nasa_id: nasa_id.to_string(),
        files,
    })
}

pub fn format_asset_text(output: &AssetOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {}\n",
        "FILES FOR".bright_cyan().bold(),
        output.nasa_id.bright_white().bold()
    ));

    if output.files.is_empty() {
        result.push_str(&format!("{}\n", "No files listed for this item.".yellow()));
    } else {
        for file in &output.files {
            result.push_str(&format!("  {}\n", file.cyan()));
        }
    }

    result.push('\n');
    result
}
