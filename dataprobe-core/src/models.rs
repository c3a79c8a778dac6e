//! Input data model for the profiling engine.
//!
//! Records enter the engine as ordered maps of [`CellValue`]s. The cell
//! variant is closed: null, missing keys and empty strings all collapse
//! into [`CellValue::Absent`] at this boundary, so nothing downstream ever
//! needs to distinguish them.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{DataProbeError, Result};

static ABSENT: CellValue = CellValue::Absent;

/// A single cell of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum CellValue {
    /// Null, missing or empty-string input
    #[default]
    Absent,
    /// Boolean value
    Boolean(bool),
    /// Numeric value
    Number(f64),
    /// Non-empty text
    Text(String),
}

impl CellValue {
    /// Creates a text cell, collapsing the empty string to `Absent`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Absent
        } else {
            Self::Text(value)
        }
    }

    /// Returns true for absent cells.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Display text of the cell. Absent cells render as the empty string.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Boolean(true) => Cow::Borrowed("true"),
            Self::Boolean(false) => Cow::Borrowed("false"),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Numeric reading of the cell.
    ///
    /// Numbers yield themselves, text is trimmed and parsed. Booleans and
    /// absent cells never parse. Non-finite results are rejected.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => parse_number(s),
            _ => None,
        }
    }
}

/// Parses text as a finite number, ignoring surrounding whitespace.
///
/// `"inf"` and `"NaN"` are accepted by `f64::from_str` but are rejected
/// here so they never reach statistics.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn format_number(value: f64) -> String {
    // -0.0 and 0.0 must compare equal as text
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Absent, Self::Number),
            serde_json::Value::String(s) => Self::text(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Self::Text(nested.to_string())
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// One row: an ordered mapping from column name to cell.
///
/// Keys keep their insertion order. A key that is not present reads as
/// [`CellValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, CellValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field. Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the cell under `name`, or `Absent` when the key is missing.
    pub fn get(&self, name: &str) -> &CellValue {
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys in this record, absent values included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no keys.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a decoded JSON object, preserving key order.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(k, v)| (k, CellValue::from(v)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An ordered, immutable snapshot of records profiled as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cells of one column across all rows, `Absent` where a row lacks the key.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.records.iter().map(move |record| record.get(name))
    }

    /// Builds a dataset from decoded JSON rows.
    ///
    /// Every row must be a JSON object; anything else is rejected with the
    /// offending row index.
    pub fn from_json_rows(rows: Vec<serde_json::Value>) -> Result<Self> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                serde_json::Value::Object(object) => Ok(Record::from_json_object(object)),
                other => Err(DataProbeError::invalid_row(
                    index,
                    format!("expected an object, found {}", json_kind(&other)),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
