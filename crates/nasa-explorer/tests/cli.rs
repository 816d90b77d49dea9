//! Runs the `nasa-explorer` binary against a local stand-in for the NASA
//! Images API and checks what it writes to stdout and stderr.

use axum::{routing::get, Json, Router};
use tokio::process::Command;

async fn search_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "collection": {
            "items": [
                {
                    "data": [{
                        "nasa_id": "as11-40-5874",
                        "title": "Apollo 11",
                        "media_type": "image",
                        "date_created": "1969-07-20T00:00:00Z"
                    }]
                },
                {
                    "data": [{
                        "nasa_id": "mars-rover",
                        "title": "Mars Rover",
                        "media_type": "video",
                        "date_created": "2021-02-18T00:00:00Z"
                    }]
                }
            ]
        }
    }))
}

async fn spawn_api() -> String {
    let app = Router::new().route("/search", get(search_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn run(base: &str, args: &[&str]) -> (serde_json::Value, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nasa-explorer"))
        .arg("--api-base")
        .arg(base)
        .arg("--verbose")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let json = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout}"));
    (json, stderr)
}

#[tokio::test]
async fn test_verbose_list_json_keeps_stdout_parseable() {
    let base = spawn_api().await;

    let (json, stderr) = run(&base, &["list", "apollo", "--json"]).await;

    assert_eq!(json["items"][0]["nasa_id"], "as11-40-5874");
    assert!(stderr.contains("Fetching results for 'apollo'"));
}

#[tokio::test]
async fn test_verbose_gallery_json_keeps_stdout_parseable() {
    let base = spawn_api().await;

    let (json, stderr) = run(&base, &["gallery", "apollo", "--type", "video", "--json"]).await;

    assert_eq!(json["items"][0]["nasa_id"], "mars-rover");
    assert!(stderr.contains("Fetching video results"));
}

#[tokio::test]
async fn test_verbose_detail_json_keeps_stdout_parseable() {
    let base = spawn_api().await;

    let (json, stderr) = run(&base, &["detail", "apollo", "--position", "2", "--json"]).await;

    assert_eq!(json["item"]["nasa_id"], "mars-rover");
    assert_eq!(json["previous"]["nasa_id"], "as11-40-5874");
    assert!(stderr.contains("Fetching results"));
}
