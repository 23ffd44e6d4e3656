//! Standings records.
//!
//! A record is one spreadsheet row keyed by header name. Values are kept as
//! text; numeric cells are stored in their display form so that `3` and
//! `3.0` both draw as `"3"`. Lookups never fail: absent fields resolve to the
//! field's default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The five columns drawn on a standings card, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Team name.
    Team,
    /// Winner winner chicken dinner count.
    Wwcd,
    /// Placement points.
    Pp,
    /// Finish (kill) points.
    Fp,
    /// Total points.
    Tp,
}

impl Field {
    /// All fields in drawing order.
    pub const ALL: [Field; 5] = [Field::Team, Field::Wwcd, Field::Pp, Field::Fp, Field::Tp];

    /// Spreadsheet header name for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Team => "Team",
            Field::Wwcd => "WWCD",
            Field::Pp => "PP",
            Field::Fp => "FP",
            Field::Tp => "TP",
        }
    }

    /// Text used when the field is absent from a row.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::Team => "",
            _ => "0",
        }
    }
}

/// One row of tournament standings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "BTreeMap<String, String>")]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a header/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Build a record from header/value pairs. Later duplicates win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw lookup by header name. Header matching is exact.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of a card field, or its default when absent.
    pub fn field(&self, field: Field) -> &str {
        self.get(field.key()).unwrap_or(field.default_value())
    }

    /// Team name, empty when absent.
    pub fn team(&self) -> &str {
        self.field(Field::Team)
    }

    /// The five drawn values in drawing order.
    pub fn row_values(&self) -> [(Field, &str); 5] {
        Field::ALL.map(|field| (field, self.field(field)))
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(object: Map<String, Value>) -> Self {
        Self {
            values: object
                .into_iter()
                .filter_map(|(key, value)| cell_text(&value).map(|text| (key, text)))
                .collect(),
        }
    }
}

impl From<Record> for BTreeMap<String, String> {
    fn from(record: Record) -> Self {
        record.values
    }
}

/// Textual form of a JSON cell. `null` counts as absent.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Parse a JSON array of row objects.
pub fn parse_records(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(json)
}
