//! Subcommand dispatch against temp configs and a local source.

mod support;

use std::fs;
use std::path::Path;

use axum::routing::get;
use axum::Router;
use clap::Parser;
use statuswatch::adapter::inbound::cli::command::Cli;
use statuswatch::adapter::inbound::cli::dispatch;
use statuswatch::error::Error;
use tempfile::TempDir;

fn write_config(dir: &TempDir, candidate_url: &str) -> String {
    let state_file = dir.path().join("tracking_data.json");
    let contents = format!(
        r#"
state_file = "{}"

[source]
timeout_secs = 2

[[source.candidates]]
url = "{candidate_url}"
format = "text"

[telegram]
enabled = false
"#,
        state_file.display()
    );
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    path_arg(&path)
}

fn path_arg(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[tokio::test]
async fn check_passes_without_telegram() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "https://setup.example.test/DeployHistory.txt");
    let cli = Cli::try_parse_from(["statuswatch", "check", "--config", &config]).unwrap();

    assert!(dispatch::execute(cli).await.is_ok());
}

#[tokio::test]
async fn missing_config_fails_before_running() {
    let dir = TempDir::new().unwrap();
    let config = path_arg(&dir.path().join("absent.toml"));
    let cli = Cli::try_parse_from(["statuswatch", "--config", &config, "check"]).unwrap();

    assert!(matches!(
        dispatch::execute(cli).await,
        Err(Error::Config(_))
    ));
}

#[tokio::test]
async fn fetch_prints_current_version() {
    let app = Router::new().route(
        "/DeployHistory.txt",
        get(|| async { "New WindowsPlayer version-0a1b2c3d at 5/1/2024 1:00:00 PM" }),
    );
    let base = support::server::spawn(app).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("{base}/DeployHistory.txt"));
    let cli = Cli::try_parse_from(["statuswatch", "--json", "fetch", "-c", &config]).unwrap();

    assert!(dispatch::execute(cli).await.is_ok());
    assert!(!dir.path().join("tracking_data.json").exists());
}

#[tokio::test]
async fn fetch_without_any_record_is_an_error() {
    let base = support::server::spawn(Router::new()).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("{base}/gone.txt"));
    let cli = Cli::try_parse_from(["statuswatch", "fetch", "-c", &config]).unwrap();

    assert!(matches!(
        dispatch::execute(cli).await,
        Err(Error::NoRecord)
    ));
}
