//! Semantic type inference by majority vote.
//!
//! Each value's display text is classified into at most one bucket,
//! checked in priority order boolean, number, date. A column takes the
//! first bucket holding at least `majority` of its values, so a handful
//! of malformed cells does not flip a numeric column to text.
//!
//! Date detection uses a fixed, locale-free grammar rather than any
//! ambient date parser, so classification is reproducible everywhere.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{CellValue, parse_number};

use super::models::DataType;

/// Date text must be longer than this to be considered at all.
const MIN_DATE_TEXT_LEN: usize = 5;

/// Naive date-time layouts accepted in addition to RFC 3339 and RFC 2822.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Calendar date layouts.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Bucket a single value can vote for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeBucket {
    Boolean,
    Number,
    Date,
}

fn classify(text: &str) -> Option<TypeBucket> {
    if text == "true" || text == "false" {
        Some(TypeBucket::Boolean)
    } else if parse_number(text).is_some() {
        Some(TypeBucket::Number)
    } else if text.chars().count() > MIN_DATE_TEXT_LEN && is_date(text) {
        Some(TypeBucket::Date)
    } else {
        None
    }
}

/// Returns true if `text` matches the date grammar.
pub fn is_date(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || DateTime::parse_from_rfc2822(text).is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
}

/// Infers the semantic type of a column from its non-absent values.
///
/// `majority` is the share of values (0-1] the winning bucket needs.
/// An empty input yields [`DataType::Unknown`]; when no bucket reaches
/// the majority the column is [`DataType::Text`].
pub fn infer_data_type<'a, I>(values: I, majority: f64) -> DataType
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut total: u64 = 0;
    let mut booleans: u64 = 0;
    let mut numbers: u64 = 0;
    let mut dates: u64 = 0;

    for value in values {
        total += 1;
        let text = value.display_text();
        match classify(text.trim()) {
            Some(TypeBucket::Boolean) => booleans += 1,
            Some(TypeBucket::Number) => numbers += 1,
            Some(TypeBucket::Date) => dates += 1,
            None => {}
        }
    }

    if total == 0 {
        return DataType::Unknown;
    }

    let threshold = majority * total as f64;
    if booleans as f64 >= threshold {
        DataType::Boolean
    } else if numbers as f64 >= threshold {
        DataType::Number
    } else if dates as f64 >= threshold {
        DataType::Date
    } else {
        DataType::Text
    }
}
