//! JSON export files.

use std::path::{Path, PathBuf};

use standcard_common::error::{StandcardError, StandcardResult};
use standcard_table_model::record::{parse_records, Record};

use crate::error::SourceError;
use crate::RecordSource;

/// Reads a JSON array of row objects, e.g. a saved `get_all_records` dump.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file synchronously.
    pub fn read(&self) -> Result<Vec<Record>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        parse_records(&content).map_err(|e| SourceError::Parse {
            origin: self.path.display().to_string(),
            source: e,
        })
    }
}

#[async_trait::async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch_records(&self) -> StandcardResult<Vec<Record>> {
        let source = self.clone();
        let records = tokio::task::spawn_blocking(move || source.read())
            .await
            .map_err(|e| StandcardError::source(e.to_string()))??;

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded records from file"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
