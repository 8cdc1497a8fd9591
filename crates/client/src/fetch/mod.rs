//! HTTP fetch pipeline for the suspension status page.
//!
//! ### Single Shot
//! - One GET per call with a bounded timeout (default: 10s).
//! - No retries, no cache: every call builds its own client and re-fetches.
//!
//! ### Decoding
//! - The body is always decoded as UTF-8 regardless of the declared charset.
//!
//! ### Failure Boundary
//! - [`StatusFetcher::fetch_page`] returns `Result`; [`StatusFetcher::fetch_status`]
//!   is the only place a failure is turned into a snapshot's `error` field.

pub mod url;

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::{Client, StatusCode, Url, header};

pub use self::url::{UrlError, parse_source_url};

use crate::extract::parse_status_page;
use typhoon_core::config::DEFAULT_SOURCE_URL;
use typhoon_core::{AppConfig, Error, StatusSnapshot, match_city};

/// Configuration for the status fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Page to scrape (default: the DGPA suspension page)
    pub url: String,

    /// User agent string (default: "mcp-tw-typhoon/0.1")
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: "mcp-tw-typhoon/0.1".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self { url: config.source_url.clone(), user_agent: config.user_agent.clone(), timeout: config.timeout() }
    }
}

/// Raw page returned by a successful fetch.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// The URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header as sent; its charset is ignored
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl PageResponse {
    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Fetches and parses the suspension status page.
#[derive(Debug, Clone, Default)]
pub struct StatusFetcher {
    config: FetchConfig,
}

impl StatusFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the raw page.
    pub async fn fetch_page(&self) -> Result<PageResponse, Error> {
        let start = Instant::now();
        let url = parse_source_url(&self.config.url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(&self.config.user_agent)
            .timeout(self.config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {e}")))?;

        let response = http.get(url.as_str()).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpError(format!("status {}", status.as_u16())));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await.map_err(request_error)?;
        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(%url, %final_url, fetch_ms, bytes = bytes.len(), "fetched status page");

        Ok(PageResponse { url, final_url, status, content_type, bytes, fetch_ms })
    }

    /// Fetch and parse the status page.
    ///
    /// Never fails: transport and parse problems end up in the snapshot's
    /// `error` field.
    pub async fn fetch_status(&self) -> StatusSnapshot {
        tracing::info!(url = %self.config.url, "fetching suspension status");

        let page = match self.fetch_page().await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(error = %err, "error fetching suspension status");
                return StatusSnapshot::unreachable(err.to_string());
            }
        };

        let snapshot = parse_status_page(&page.text()).into_snapshot();
        match &snapshot.error {
            Some(error) => tracing::warn!(%error, updated_at = %snapshot.updated_at, "status table not parsed"),
            None => tracing::debug!(records = snapshot.records.len(), updated_at = %snapshot.updated_at, "parsed status"),
        }

        snapshot
    }

    /// Look up one city on a freshly fetched snapshot and format the result line.
    pub async fn check_city(&self, query: &str) -> String {
        let snapshot = self.fetch_status().await;
        match_city(&snapshot, query)
    }
}

fn request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() { Error::FetchTimeout(err.to_string()) } else { Error::HttpError(format!("network error: {err}")) }
}
