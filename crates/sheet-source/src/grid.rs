//! Header-row tables.
//!
//! The first row names the columns; every later row becomes one record.
//! Rows are padded to the header width, so a missing or null cell reads as
//! `""` just like an empty one. Cells under a blank header are ignored, and
//! rows with no non-empty cell are skipped.

use serde_json::Value;
use standcard_table_model::record::{cell_text, Record};

/// Convert a row grid into records keyed by the header row.
pub fn records_from_grid(rows: &[Vec<Value>]) -> Vec<Record> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    let keys: Vec<Option<String>> = header
        .iter()
        .map(|cell| {
            cell_text(cell)
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        })
        .collect();

    body.iter()
        .filter(|row| row.iter().any(|cell| !is_blank(cell)))
        .map(|row| {
            Record::from_pairs(keys.iter().enumerate().filter_map(|(i, key)| {
                let text = row.get(i).and_then(cell_text).unwrap_or_default();
                Some((key.clone()?, text))
            }))
        })
        .collect()
}

fn is_blank(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
