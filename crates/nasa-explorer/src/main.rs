use crate::prelude::*;
use clap::Parser;

mod error;
mod mcp;
mod nasa;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search, list, filter and page through the NASA Images API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the NASA Images API
    #[clap(
        long,
        env = "NASA_API_BASE",
        global = true,
        default_value = nasa::DEFAULT_API_BASE
    )]
    api_base: String,

    /// HTTP request timeout in seconds
    #[clap(long, env = "NASA_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "NASA_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List search results with filtering, sorting and pagination
    List(crate::nasa::list::ListOptions),

    /// Show search results of one media type as a gallery
    Gallery(crate::nasa::gallery::GalleryOptions),

    /// Show one search result with its neighbours
    Detail(crate::nasa::detail::DetailOptions),

    /// List the files behind a NASA media item
    Asset(crate::nasa::asset::AssetOptions),

    /// Interactive browsing session
    Browse(crate::nasa::browse::BrowseOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::nasa::list::run(options, app.global).await,
        SubCommands::Gallery(options) => crate::nasa::gallery::run(options, app.global).await,
        SubCommands::Detail(options) => crate::nasa::detail::run(options, app.global).await,
        SubCommands::Asset(options) => crate::nasa::asset::run(options, app.global).await,
        SubCommands::Browse(options) => crate::nasa::browse::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
