//! Status page extraction.
//!
//! ### Pipeline
//! - Parse HTML into a library-neutral [`Node`] tree through a [`PageParser`].
//! - Read the update timestamp from the whole document text. This does not
//!   depend on the table being found.
//! - Select the first `<table>` mentioning the city header label.
//! - Extract one (city, status) record per qualifying row.
//!
//! ### Stable Abstraction
//! - Table and row rules in [`table`] only see [`Node`], so the HTML parser is
//!   replaceable by implementing [`PageParser`].

pub mod dom;
pub mod table;
pub mod timestamp;

pub use dom::{Child, Node, PageParser, ScraperParser};
pub use table::{TableError, extract_record, extract_records, find_status_table, row_cells};
pub use timestamp::extract_updated_at;

use typhoon_core::StatusSnapshot;
use typhoon_core::model::{SuspensionRecord, UNKNOWN_UPDATED_AT};

/// Result of parsing one status page, before it is folded into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Timestamp as printed, or the `Unknown` sentinel.
    pub updated_at: String,
    pub records: Result<Vec<SuspensionRecord>, TableError>,
}

impl ParsedPage {
    /// Fold into a snapshot; a table error keeps the parsed timestamp.
    pub fn into_snapshot(self) -> StatusSnapshot {
        match self.records {
            Ok(records) => StatusSnapshot::new(self.updated_at, records),
            Err(err) => StatusSnapshot::failed(self.updated_at, err.to_string()),
        }
    }
}

/// Parse a status page with the default parser.
pub fn parse_status_page(html: &str) -> ParsedPage {
    parse_status_page_with(&ScraperParser, html)
}

/// Parse a status page with the given parser.
pub fn parse_status_page_with(parser: &dyn PageParser, html: &str) -> ParsedPage {
    let root = parser.parse(html);

    let updated_at = extract_updated_at(&root.text()).unwrap_or_else(|| UNKNOWN_UPDATED_AT.to_string());
    let records = find_status_table(&root).map(extract_records);

    ParsedPage { updated_at, records }
}
