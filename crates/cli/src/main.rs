//! typhoon: one-shot check of the suspension status page from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typhoon_client::{FetchConfig, StatusFetcher};
use typhoon_core::{AppConfig, match_city};

#[derive(Parser, Debug)]
#[command(name = "typhoon", version, about = "Check Taiwan work/school suspension announcements")]
struct Cli {
    /// City or county to look up (台 and 臺 are both accepted)
    #[arg(default_value = "台北")]
    city: String,

    /// Print the fetched snapshot as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Override the page to scrape (takes precedence over MCP_TYPHOON_SOURCE_URL)
    #[arg(long)]
    source_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.source_url {
        config.source_url = url;
    }

    let fetcher = StatusFetcher::new(FetchConfig::from(&config));
    let snapshot = fetcher.fetch_status().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Update time: {}", snapshot.updated_at);
    println!("Cities found: {}", snapshot.records.len());
    if let Some(first) = snapshot.records.first() {
        println!("First city: {} ({})", first.city, first.status);
    }

    println!();
    println!("Checking '{}'...", cli.city);
    println!("{}", match_city(&snapshot, &cli.city));

    Ok(())
}
