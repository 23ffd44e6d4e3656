//! Source-side failures.

use std::path::PathBuf;

use standcard_common::error::StandcardError;

/// Errors raised while fetching records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record data from {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Missing API key: set {env}")]
    MissingApiKey { env: String },

    #[error("Invalid API base URL {base}")]
    BadBaseUrl { base: String },
}

impl From<SourceError> for StandcardError {
    fn from(err: SourceError) -> Self {
        StandcardError::source(err.to_string())
    }
}
