//! City name matching against a fetched snapshot.
//!
//! Matching is bidirectional substring containment on the normalized query,
//! and the first record in document order wins. There is no scoring.

use crate::model::{StatusSnapshot, SuspensionRecord};

/// Number of known cities listed as a hint when nothing matches.
const HINT_LIMIT: usize = 5;

/// Canonicalize a city query: the source only uses 臺, never 台.
pub fn normalize_city(query: &str) -> String {
    query.replace('台', "臺")
}

/// First record whose city contains `query` or is contained in it.
///
/// `query` is expected to be normalized already.
pub fn find_city<'a>(records: &'a [SuspensionRecord], query: &str) -> Option<&'a SuspensionRecord> {
    records
        .iter()
        .find(|r| r.city.contains(query) || query.contains(r.city.as_str()))
}

/// Match `query` against `snapshot` and format the display line.
///
/// A snapshot carrying an error short-circuits to `Error: <error>`.
pub fn match_city(snapshot: &StatusSnapshot, query: &str) -> String {
    if let Some(error) = &snapshot.error {
        return format!("Error: {error}");
    }

    let query = normalize_city(query);

    match find_city(&snapshot.records, &query) {
        Some(record) => format!("【{}】{} (更新時間: {})", record.city, record.status, snapshot.updated_at),
        None => not_found_line(snapshot, &query),
    }
}

fn not_found_line(snapshot: &StatusSnapshot, query: &str) -> String {
    let hint = snapshot.cities().take(HINT_LIMIT).collect::<Vec<_>>().join(", ");
    format!("找不到 '{query}' 的資料。目前資料包含: {hint}...")
}
