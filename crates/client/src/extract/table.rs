//! Status table discovery and row extraction.
//!
//! Rows on the source page come in several shapes: a region label spanning
//! several rows (`rowspan`) precedes the city on the first row of each region
//! only. Instead of modelling spans, each row is scanned for the first cell
//! that looks like a city and the cell after it is taken as the status.

use typhoon_core::model::{CITY_HEADER_LABEL, SuspensionRecord, has_city_suffix};

use super::dom::Node;

/// Why no status table could be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The document has no `<table>` at all.
    #[error("No table found")]
    NoTable,

    /// Tables exist but none carries the city header label.
    #[error("Status table not found")]
    StatusTableMissing,
}

/// First table in document order whose text contains the city header label.
pub fn find_status_table(root: &Node) -> Result<&Node, TableError> {
    let tables = root.find_all(&["table"]);
    if tables.is_empty() {
        return Err(TableError::NoTable);
    }

    tables
        .into_iter()
        .find(|table| table.text().contains(CITY_HEADER_LABEL))
        .ok_or(TableError::StatusTableMissing)
}

/// Trimmed texts of the header and data cells of a row, in column order.
pub fn row_cells(row: &Node) -> Vec<String> {
    row.find_all(&["td", "th"])
        .into_iter()
        .map(Node::stripped_text)
        .collect()
}

/// Apply the first-city-cell rule to one row.
///
/// Returns `None` when no cell ends in 縣/市, when the city cell is the last
/// one, or when the "city" is the header label itself.
pub fn extract_record(cells: &[String]) -> Option<SuspensionRecord> {
    let index = cells.iter().position(|c| has_city_suffix(c))?;
    let city = &cells[index];
    let status = cells.get(index + 1)?;

    if city == CITY_HEADER_LABEL {
        return None;
    }

    Some(SuspensionRecord::new(city.as_str(), status.as_str()))
}

/// All records of `table`, in row order, duplicates kept.
pub fn extract_records(table: &Node) -> Vec<SuspensionRecord> {
    table
        .find_all(&["tr"])
        .into_iter()
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .filter_map(|cells| extract_record(&cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::dom::Child;

    fn cells(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn td(text: &str) -> Child {
        Child::Element(Node::new("td", vec![Child::Text(text.into())]))
    }

    fn tr(cells: Vec<Child>) -> Child {
        Child::Element(Node::new("tr", cells))
    }

    fn table(rows: Vec<Child>) -> Node {
        Node::new("table", rows)
    }

    #[test]
    fn test_region_label_is_skipped() {
        let record = extract_record(&cells(&["北部地區", "基隆市", "尚未宣布消息"]));
        assert_eq!(record, Some(SuspensionRecord::new("基隆市", "尚未宣布消息")));
    }

    #[test]
    fn test_row_without_region() {
        let record = extract_record(&cells(&["臺北市", "停止上班上課"]));
        assert_eq!(record, Some(SuspensionRecord::new("臺北市", "停止上班上課")));
    }

    #[test]
    fn test_city_in_last_cell_is_dropped() {
        assert_eq!(extract_record(&cells(&["北部地區", "基隆市"])), None);
    }

    #[test]
    fn test_row_without_city() {
        assert_eq!(extract_record(&cells(&["區域", "縣市名稱", "是否停止上班上課情形"])), None);
    }

    #[test]
    fn test_first_city_cell_wins() {
        let record = extract_record(&cells(&["新竹縣", "新竹市", "尚未宣布消息"]));
        assert_eq!(record, Some(SuspensionRecord::new("新竹縣", "新竹市")));
    }

    #[test]
    fn test_find_status_table_no_tables() {
        let root = Node::new("html", vec![Child::Element(Node::new("body", Vec::new()))]);
        assert_eq!(find_status_table(&root), Err(TableError::NoTable));
    }

    #[test]
    fn test_find_status_table_without_header() {
        let root = Node::new("html", vec![Child::Element(table(vec![tr(vec![td("選單")])]))]);
        assert_eq!(find_status_table(&root), Err(TableError::StatusTableMissing));
    }

    #[test]
    fn test_find_status_table_picks_first_match() {
        let menu = table(vec![tr(vec![td("首頁")])]);
        let first = table(vec![tr(vec![td("縣市名稱"), td("情形")]), tr(vec![td("基隆市"), td("A")])]);
        let second = table(vec![tr(vec![td("縣市名稱"), td("情形")]), tr(vec![td("臺北市"), td("B")])]);
        let root = Node::new(
            "html",
            vec![Child::Element(menu), Child::Element(first.clone()), Child::Element(second)],
        );

        assert_eq!(find_status_table(&root), Ok(&first));
    }

    #[test]
    fn test_extract_records_mixed_rows() {
        let status = table(vec![
            tr(vec![td("區域"), td("縣市名稱"), td("是否停止上班上課情形")]),
            tr(vec![td("北部地區"), td(" 基隆市 "), td("尚未宣布消息")]),
            tr(vec![td("臺北市"), td("停止上班上課")]),
            tr(vec![td("東部地區"), td("花蓮縣")]),
            tr(Vec::new()),
            tr(vec![td("臺北市"), td("停止上班上課")]),
        ]);

        let records = extract_records(&status);
        assert_eq!(
            records,
            vec![
                SuspensionRecord::new("基隆市", "尚未宣布消息"),
                SuspensionRecord::new("臺北市", "停止上班上課"),
                SuspensionRecord::new("臺北市", "停止上班上課"),
            ]
        );
    }

    #[test]
    fn test_extracted_cities_keep_invariants() {
        let status = table(vec![
            tr(vec![td("縣市名稱"), td("情形")]),
            tr(vec![td("基隆市"), td("")]),
            tr(vec![td("新竹縣"), td("照常上班上課")]),
        ]);

        for record in extract_records(&status) {
            assert!(!record.city.is_empty());
            assert!(has_city_suffix(&record.city));
            assert_ne!(record.city, CITY_HEADER_LABEL);
        }
    }
}
