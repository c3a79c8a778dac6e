//! Column discovery.
//!
//! Column order is owned by the engine: it is the first-appearance order of
//! keys carrying a non-absent value, scanning records in order and each
//! record's keys in its own order. Every later stage iterates this list.

use indexmap::IndexSet;

use crate::models::Dataset;

/// Returns the ordered, de-duplicated column names of a dataset.
///
/// A key whose value is absent in every record is excluded entirely.
pub fn discover_columns(dataset: &Dataset) -> Vec<String> {
    let mut columns: IndexSet<&str> = IndexSet::new();

    for record in dataset.records() {
        for (name, value) in record.iter() {
            if !value.is_absent() {
                columns.insert(name);
            }
        }
    }

    columns.into_iter().map(str::to_string).collect()
}
