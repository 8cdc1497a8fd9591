//! mcp-tw-typhoon server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;
use typhoon_client::{FetchConfig, StatusFetcher};
use typhoon_core::AppConfig;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    tracing::info!(source_url = %config.source_url, timeout_ms = config.timeout_ms, "Starting mcp-tw-typhoon server on stdio transport");

    let handler = handler::TyphoonServer::new(StatusFetcher::new(FetchConfig::from(&config)));
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
