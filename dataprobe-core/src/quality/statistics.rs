//! Per-column statistics.
//!
//! Each [`ColumnProfile`] depends only on that column's cells and the
//! dataset row count, so columns are profiled independently and, when
//! enabled, in parallel on the rayon pool. `par_iter().collect()` keeps
//! the input order, so the result does not depend on scheduling.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::models::{CellValue, Dataset};

use super::anomaly::count_outliers;
use super::config::QualityConfig;
use super::inference::infer_data_type;
use super::models::{ColumnProfile, DataType, percentage};

/// Min, max and mean of the parseable values of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

impl NumericSummary {
    /// Summarizes `values`, or `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max, sum) = rest
            .iter()
            .fold((*first, *first, *first), |(min, max, sum), &v| {
                (min.min(v), max.max(v), sum + v)
            });

        Some(Self {
            min,
            max,
            mean: sum / values.len() as f64,
        })
    }
}

/// Counts redundant repeats of display text across all cells.
///
/// Absent cells take part as the empty string, so a column with many
/// missing values also reports many duplicates.
pub fn count_duplicates<'a, I>(cells: I) -> u64
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut frequencies: HashMap<Cow<'a, str>, u64> = HashMap::new();
    for cell in cells {
        *frequencies.entry(cell.display_text()).or_insert(0) += 1;
    }

    frequencies
        .values()
        .filter(|&&count| count > 1)
        .map(|count| count - 1)
        .sum()
}

/// Computes the profile of one column.
pub fn profile_column(dataset: &Dataset, name: &str, config: &QualityConfig) -> ColumnProfile {
    let total_count = dataset.len() as u64;
    let present: Vec<&CellValue> = dataset
        .column(name)
        .filter(|cell| !cell.is_absent())
        .collect();

    let non_null_count = present.len() as u64;
    let null_count = total_count.saturating_sub(non_null_count);
    let data_type = infer_data_type(present.iter().copied(), config.type_majority);

    let distinct: HashSet<Cow<'_, str>> = present.iter().map(|cell| cell.display_text()).collect();
    let unique_count = distinct.len() as u64;

    let (outliers, summary) = if data_type == DataType::Number {
        let numbers: Vec<f64> = present.iter().filter_map(|cell| cell.as_number()).collect();
        (
            count_outliers(&numbers, config.iqr_multiplier),
            NumericSummary::from_values(&numbers),
        )
    } else {
        (0, None)
    };

    let profile = ColumnProfile {
        name: name.to_string(),
        data_type,
        total_count,
        non_null_count,
        null_count,
        null_percentage: percentage(null_count, total_count),
        unique_count,
        uniqueness: percentage(unique_count, non_null_count),
        outliers,
        duplicates: count_duplicates(dataset.column(name)),
        min: summary.map(|s| s.min),
        max: summary.map(|s| s.max),
        mean: summary.map(|s| s.mean),
    };

    tracing::trace!(
        column = %profile.name,
        data_type = %profile.data_type,
        null_count = profile.null_count,
        unique_count = profile.unique_count,
        outliers = profile.outliers,
        duplicates = profile.duplicates,
        "Profiled column"
    );

    profile
}

/// Profiles `columns` in the given order.
pub fn profile_columns(
    dataset: &Dataset,
    columns: &[String],
    config: &QualityConfig,
) -> Vec<ColumnProfile> {
    if config.parallel {
        columns
            .par_iter()
            .map(|name| profile_column(dataset, name, config))
            .collect()
    } else {
        columns
            .iter()
            .map(|name| profile_column(dataset, name, config))
            .collect()
    }
}
