//! check_suspension tool implementation.
//!
//! With a city, reports that city's status; without one, summarizes every
//! announced suspension.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use typhoon_client::StatusFetcher;
use typhoon_core::{Error, format_summary};

/// Longest city argument accepted, in characters.
const MAX_CITY_CHARS: usize = 200;

/// Input parameters for check_suspension tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CheckSuspensionParams {
    /// City name to check (e.g., '台北市', '新竹縣', '高雄').
    /// If omitted, returns a summary of all announced suspensions.
    #[serde(default)]
    pub city: Option<String>,
}

/// Trim the city argument; blank counts as omitted.
fn validate_city(city: Option<String>) -> Result<Option<String>, Error> {
    let Some(city) = city else {
        return Ok(None);
    };

    let city = city.trim();
    if city.is_empty() {
        return Ok(None);
    }
    if city.chars().count() > MAX_CITY_CHARS {
        return Err(Error::InvalidInput(format!("city must be at most {MAX_CITY_CHARS} characters")));
    }
    if city.chars().any(char::is_control) {
        return Err(Error::InvalidInput("city must not contain control characters".into()));
    }

    Ok(Some(city.to_string()))
}

/// Implementation of the check_suspension tool.
pub async fn check_impl(fetcher: &StatusFetcher, params: CheckSuspensionParams) -> Result<CallToolResult, McpError> {
    let text = match validate_city(params.city)? {
        Some(city) => fetcher.check_city(&city).await,
        None => format_summary(&fetcher.fetch_status().await),
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
