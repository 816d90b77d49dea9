use std::str::FromStr;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use nasa_explorer_core::nasa::{MediaRecord, MediaType, SortKey, SortOrder};
use nasa_explorer_core::navigation::Direction;
use nasa_explorer_core::session::{FetchTicket, Session, View};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::detail::{build_detail_output, format_detail_text};
use super::gallery::{build_gallery_output, format_gallery_text, gallery_columns};
use super::list::{build_list_output, format_list_text};
use super::{build_client, fetch_asset, fetch_results};

const PROMPT: &str = "nasa> ";

const HELP: &str = "\
Commands:
  search <query>       Run a new search (blank searches for \"apollo\")
  filter [text]        Filter the current view by title; no text clears it
  sort title|date      Sort the list view
  order [asc|desc]     Set the list order; no argument toggles it
  page <n>             Jump to page n of the current view
  next-page, prev-page Move between pages
  list                 Show the list view
  gallery [type]       Show the gallery for image, video or audio
  open <n>             Open item n of the current page
  next, prev           Step through the result set in the detail view
  back                 Return from the detail view
  asset                List the files of the open item
  help                 Show this help
  quit                 Leave the browser
";

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Initial search query (defaults to "apollo" when blank)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,
}

/// One line of input to the interactive browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Filter(String),
    Sort(SortKey),
    /// `None` toggles the current order
    Order(Option<SortOrder>),
    Page(usize),
    NextPage,
    PrevPage,
    List,
    Gallery(Option<MediaType>),
    /// 1-indexed position on the current page
    Open(usize),
    Step(Direction),
    Back,
    Asset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Search(rest.to_string()),
        "filter" | "f" => BrowseCommand::Filter(rest.to_string()),
        "sort" => BrowseCommand::Sort(SortKey::from_str(rest)?),
        "order" => {
            if rest.is_empty() {
                BrowseCommand::Order(None)
            } else {
                BrowseCommand::Order(Some(SortOrder::from_str(rest)?))
            }
        }
        "page" | "p" => BrowseCommand::Page(parse_number(rest)?),
        "next-page" | "np" => BrowseCommand::NextPage,
        "prev-page" | "pp" => BrowseCommand::PrevPage,
        "list" | "l" => BrowseCommand::List,
        "gallery" | "g" => {
            if rest.is_empty() {
                BrowseCommand::Gallery(None)
            } else {
                BrowseCommand::Gallery(Some(MediaType::from_str(rest)?))
            }
        }
        "open" | "o" => BrowseCommand::Open(parse_number(rest)?),
        "next" | "n" => BrowseCommand::Step(Direction::Next),
        "prev" => BrowseCommand::Step(Direction::Previous),
        "back" | "b" => BrowseCommand::Back,
        "asset" | "a" => BrowseCommand::Asset,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    };

    Ok(command)
}

fn parse_number(arg: &str) -> Result<usize, String> {
    if arg.is_empty() {
        return Err("Expected a number".to_string());
    }
    arg.parse::<usize>().map_err(|_| format!("Invalid number: {arg}"))
}

/// Text of whichever view the session currently shows
pub fn render(session: &Session) -> String {
    match session.view() {
        View::List => format_list_text(&build_list_output(
            session.query(),
            session.results(),
            session.list_query().clone(),
        )),
        View::Gallery => format_gallery_text(
            &build_gallery_output(
                session.query(),
                session.results(),
                session.gallery_query().clone(),
            ),
            gallery_columns(),
        ),
        View::Detail => {
            format_detail_text(&build_detail_output(session.query(), session.detail()))
        }
    }
}

/// Apply one command that needs no network access
///
/// Returns a message to show instead of re-rendering the view, if any.
pub fn apply(session: &mut Session, command: &BrowseCommand) -> Option<String> {
    match command {
        BrowseCommand::Filter(filter) => session.set_filter(filter),
        BrowseCommand::Sort(key) => session.set_sort_key(*key),
        BrowseCommand::Order(Some(order)) => session.set_order(*order),
        BrowseCommand::Order(None) => session.toggle_order(),
        BrowseCommand::Page(page) => session.set_page(*page),
        BrowseCommand::NextPage => {
            if !session.next_page() {
                return Some("Already on the last page.".to_string());
            }
        }
        BrowseCommand::PrevPage => {
            if !session.prev_page() {
                return Some("Already on the first page.".to_string());
            }
        }
        BrowseCommand::List => session.show_list(),
        BrowseCommand::Gallery(media_type) => session.show_gallery(*media_type),
        BrowseCommand::Open(position) => {
            let opened = position
                .checked_sub(1)
                .and_then(|position| session.open(position))
                .is_some();
            if !opened {
                return Some("Item not found.".to_string());
            }
        }
        BrowseCommand::Step(direction) => {
            if session.detail().is_none() {
                return Some("Open an item first.".to_string());
            }
            if !session.step(*direction) {
                return Some(match direction {
                    Direction::Next => "Already at the last item.".to_string(),
                    Direction::Previous => "Already at the first item.".to_string(),
                });
            }
        }
        BrowseCommand::Back => session.close_detail(),
        BrowseCommand::Help => return Some(HELP.to_string()),
        BrowseCommand::Search(_) | BrowseCommand::Asset | BrowseCommand::Quit => {}
    }
    None
}

/// Result of a search task, tagged with the ticket it was started under
#[derive(Debug)]
pub struct SearchDone {
    ticket: FetchTicket,
    query: String,
    outcome: Result<Vec<MediaRecord>, FetchError>,
}

/// What applying a finished search did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied,
    /// A newer search was started after this one
    Superseded,
    Failed(String),
}

/// Start a search in the background; its result arrives on `done`
fn spawn_search(
    session: &mut Session,
    client: &reqwest::Client,
    global: &crate::Global,
    query: &str,
    done: &mpsc::UnboundedSender<SearchDone>,
) {
    let ticket = session.begin_fetch();
    let client = client.clone();
    let api_base = global.api_base.clone();
    let query = query.trim().to_string();
    let done = done.clone();

    tokio::spawn(async move {
        let outcome = fetch_results(&client, &api_base, &query, None).await;
        // The receiver is gone only when the browser has exited
        let _ = done.send(SearchDone {
            ticket,
            query,
            outcome,
        });
    });
}

/// Apply a finished search unless a newer one has been started since
///
/// A failed search leaves the previous result set in place.
pub fn finish_search(session: &mut Session, done: SearchDone) -> SearchOutcome {
    if !session.is_latest(done.ticket) {
        log::debug!("Discarding results of superseded search '{}'", done.query);
        return SearchOutcome::Superseded;
    }

    match done.outcome {
        Ok(records) => {
            session.complete_fetch(done.ticket, &done.query, records);
            SearchOutcome::Applied
        }
        Err(e) => SearchOutcome::Failed(e.to_string()),
    }
}

async fn show_asset(session: &Session, client: &reqwest::Client, global: &crate::Global) {
    let Some(record) = session.detail().and_then(|s| s.current().ok()) else {
        println!("Open an item first.");
        return;
    };

    match fetch_asset(client, &global.api_base, &record.nasa_id).await {
        Ok(files) => {
            let output = super::asset::AssetOutput {
                nasa_id: record.nasa_id.clone(),
                files,
            };
            print!("{}", super::asset::format_asset_text(&output));
        }
        Err(e) => eprintln!("{} {e}", "Asset lookup failed:".red().bold()),
    }
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("NASA Images API Base: {}", global.api_base);
    }

    let client = build_client(&global)?;
    let mut session = Session::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();

    println!("Type {} for a list of commands.", "help".cyan());
    spawn_search(&mut session, &client, &global, &options.query, &done_tx);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            Some(done) = done_rx.recv() => {
                match finish_search(&mut session, done) {
                    SearchOutcome::Applied => print!("\n{}", render(&session)),
                    SearchOutcome::Superseded => {}
                    SearchOutcome::Failed(e) => {
                        eprintln!("\n{} {e}", "Search failed:".red().bold())
                    }
                }
                continue;
            }
        };

        let Some(line) = line else {
            break; // EOF
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{}", message.yellow());
                continue;
            }
        };

        log::debug!("Browse command: {command:?}");

        match &command {
            BrowseCommand::Quit => break,
            BrowseCommand::Search(query) => {
                spawn_search(&mut session, &client, &global, query, &done_tx);
                println!("Searching...");
            }
            BrowseCommand::Asset => show_asset(&session, &client, &global).await,
            other => match apply(&mut session, other) {
                Some(message) => println!("{message}"),
                None => print!("{}", render(&session)),
            },
        }
    }

    Ok(())
}
