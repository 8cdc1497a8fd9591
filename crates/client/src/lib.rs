//! Client code for mcp-tw-typhoon.
//!
//! This crate provides the HTTP fetch pipeline for the suspension status page
//! and the extraction of its city/status table, shared by the server and CLI.

pub mod extract;
pub mod fetch;

pub use extract::{
    Node, PageParser, ParsedPage, ScraperParser, TableError, extract_updated_at, parse_status_page,
    parse_status_page_with,
};

pub use fetch::{FetchConfig, PageResponse, StatusFetcher};
