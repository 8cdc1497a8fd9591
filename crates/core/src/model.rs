//! Suspension records and the per-fetch snapshot.

use serde::{Deserialize, Serialize};

/// Sentinel used when the page carries no update timestamp.
pub const UNKNOWN_UPDATED_AT: &str = "Unknown";

/// Header label of the city column; never a city itself.
pub const CITY_HEADER_LABEL: &str = "縣市名稱";

/// Whether `text` ends with the county (縣) or city (市) suffix.
pub fn has_city_suffix(text: &str) -> bool {
    text.ends_with('縣') || text.ends_with('市')
}

/// One city or county and its announced status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspensionRecord {
    /// City or county name, e.g. "基隆市".
    pub city: String,
    /// Free-text status, e.g. "尚未宣布消息" or "停止上班上課".
    pub status: String,
}

impl SuspensionRecord {
    pub fn new(city: impl Into<String>, status: impl Into<String>) -> Self {
        Self { city: city.into(), status: status.into() }
    }
}

/// Result of a single fetch-and-parse.
///
/// When `error` is set the records are empty and must not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Timestamp as printed by the source, or [`UNKNOWN_UPDATED_AT`].
    pub updated_at: String,
    /// Records in document order. Duplicates are kept.
    pub records: Vec<SuspensionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// A successful snapshot.
    pub fn new(updated_at: impl Into<String>, records: Vec<SuspensionRecord>) -> Self {
        Self { updated_at: updated_at.into(), records, error: None }
    }

    /// A failed snapshot that still carries whatever timestamp was parsed.
    pub fn failed(updated_at: impl Into<String>, error: impl Into<String>) -> Self {
        Self { updated_at: updated_at.into(), records: Vec::new(), error: Some(error.into()) }
    }

    /// A failed snapshot for a fetch that never produced a document.
    pub fn unreachable(error: impl Into<String>) -> Self {
        Self::failed(UNKNOWN_UPDATED_AT, error)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// City names in document order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.city.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_city_suffix() {
        assert!(has_city_suffix("基隆市"));
        assert!(has_city_suffix("新竹縣"));
        assert!(!has_city_suffix("北部地區"));
        assert!(!has_city_suffix(""));
    }

    #[test]
    fn test_header_label_has_no_city_suffix() {
        assert!(!has_city_suffix(CITY_HEADER_LABEL));
    }

    #[test]
    fn test_failed_snapshot_has_no_records() {
        let snapshot = StatusSnapshot::failed("2026/02/08 20:01:11", "Status table not found");
        assert!(!snapshot.is_ok());
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.updated_at, "2026/02/08 20:01:11");
    }

    #[test]
    fn test_unreachable_uses_sentinel() {
        let snapshot = StatusSnapshot::unreachable("HTTP_ERROR: status 503");
        assert_eq!(snapshot.updated_at, UNKNOWN_UPDATED_AT);
        assert_eq!(snapshot.error.as_deref(), Some("HTTP_ERROR: status 503"));
    }

    #[test]
    fn test_cities_in_order() {
        let snapshot = StatusSnapshot::new(
            UNKNOWN_UPDATED_AT,
            vec![SuspensionRecord::new("基隆市", "尚未宣布消息"), SuspensionRecord::new("臺北市", "停止上班上課")],
        );
        assert_eq!(snapshot.cities().collect::<Vec<_>>(), vec!["基隆市", "臺北市"]);
    }

    #[test]
    fn test_serialize_omits_empty_error() {
        let snapshot = StatusSnapshot::new("2026/02/08 20:01:11", vec![SuspensionRecord::new("基隆市", "尚未宣布消息")]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("error"));
        assert!(json.contains("基隆市"));
    }
}
