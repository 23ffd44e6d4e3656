//! Google Sheets v4 values API.
//!
//! Reads one A1 range with an API key and treats the first returned row as
//! the header, matching how shared standings sheets are laid out.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use standcard_common::config::SheetsConfig;
use standcard_common::error::StandcardResult;
use standcard_table_model::record::Record;

use crate::error::SourceError;
use crate::grid::records_from_grid;
use crate::link::SheetLink;
use crate::RecordSource;

/// Longest error body kept from a failed response.
const MAX_ERROR_BODY: usize = 200;

/// Response body of `spreadsheets.values.get`.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Fetches records from a spreadsheet through the values API.
#[derive(Debug, Clone)]
pub struct SheetsApiSource {
    client: Client,
    url: Url,
    sheet: SheetLink,
    range: String,
}

impl SheetsApiSource {
    /// Build a source for `sheet` using the configured API base and range.
    pub fn new(sheet: SheetLink, config: &SheetsConfig, api_key: &str) -> Result<Self, SourceError> {
        let url = values_url(&config.api_base, sheet.id(), &config.range, api_key)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            url,
            sheet,
            range: config.range.clone(),
        })
    }

    /// Build a source reading the API key from the configured environment
    /// variable.
    pub fn from_env(sheet: SheetLink, config: &SheetsConfig) -> Result<Self, SourceError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SourceError::MissingApiKey {
                env: config.api_key_env.clone(),
            })?;
        Self::new(sheet, config, &api_key)
    }

    async fn fetch_grid(&self) -> Result<Vec<Vec<Value>>, SourceError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;
        let range: ValueRange = serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
            origin: self.describe(),
            source: e,
        })?;
        Ok(range.values)
    }
}

#[async_trait::async_trait]
impl RecordSource for SheetsApiSource {
    async fn fetch_records(&self) -> StandcardResult<Vec<Record>> {
        tracing::debug!(sheet = self.sheet.id(), range = %self.range, "Fetching sheet values");

        let grid = self.fetch_grid().await?;
        let records = records_from_grid(&grid);

        tracing::info!(
            sheet = self.sheet.id(),
            rows = grid.len(),
            records = records.len(),
            "Fetched sheet records"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("{} range {}", self.sheet, self.range)
    }
}

/// `{base}/v4/spreadsheets/{id}/values/{range}?key={key}` with every segment
/// percent-encoded.
fn values_url(base: &str, sheet_id: &str, range: &str, api_key: &str) -> Result<Url, SourceError> {
    let bad_base = || SourceError::BadBaseUrl {
        base: base.to_string(),
    };

    let mut url = Url::parse(base).map_err(|_| bad_base())?;
    url.path_segments_mut()
        .map_err(|_| bad_base())?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", sheet_id, "values", range]);
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url)
}
