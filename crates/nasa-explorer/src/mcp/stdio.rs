use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting NASA Explorer MCP server on stdio (API: {})", global.api_base);
    }
    log::info!("MCP stdio transport ready");

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            log::info!("stdin closed, shutting down");
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        log::debug!("<- {message}");

        let Some(response) = super::handle_request(message, &global).await else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        log::debug!("-> {response_json}");

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
