//! Update timestamp as printed on the status page.

use std::sync::LazyLock;

use regex::Regex;

static UPDATED_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"更新時間：(\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2})").expect("invalid updated-at pattern")
});

/// Find `更新時間：YYYY/MM/DD HH:MM:SS` anywhere in `text` and return the date-time part.
pub fn extract_updated_at(text: &str) -> Option<String> {
    UPDATED_AT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
