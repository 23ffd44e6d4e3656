//! Standcard Sheet Source
//!
//! Record retrieval lives behind [`RecordSource`] so the selector and
//! renderer never depend on a particular spreadsheet API.
//!
//! - **Link:** Extract a spreadsheet id from a shared link
//! - **Grid:** Header-row tables to records
//! - **File:** JSON array exports on disk
//! - **Sheets API:** The Google Sheets v4 values endpoint

pub mod error;
pub mod file;
pub mod grid;
pub mod link;
pub mod sheets_api;

use standcard_common::error::StandcardResult;
use standcard_table_model::record::Record;

pub use error::SourceError;
pub use file::JsonFileSource;
pub use grid::records_from_grid;
pub use link::SheetLink;
pub use sheets_api::SheetsApiSource;

/// Anything that can produce an ordered list of standings rows.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch all rows in source order.
    async fn fetch_records(&self) -> StandcardResult<Vec<Record>>;

    /// Human-readable description for logs. Must not contain secrets.
    fn describe(&self) -> String;
}
