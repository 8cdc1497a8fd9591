//! list_all_suspensions tool implementation.

use rmcp::{ErrorData as McpError, model::*};
use typhoon_client::StatusFetcher;
use typhoon_core::format_listing;

/// Implementation of the list_all_suspensions tool.
pub async fn list_impl(fetcher: &StatusFetcher) -> Result<CallToolResult, McpError> {
    let snapshot = fetcher.fetch_status().await;
    Ok(CallToolResult::success(vec![Content::text(format_listing(&snapshot))]))
}
