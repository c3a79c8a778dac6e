//! CSV decoding.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{CellValue, Dataset, Record};
use crate::{DataProbeError, Result};

/// Decodes CSV with a header row into a dataset.
///
/// Header names are trimmed; field values are kept verbatim as text, with
/// empty fields becoming absent. Blank lines are skipped. Rows may be
/// ragged: a short row simply lacks the trailing keys and fields past the
/// last header are dropped. When two headers share a name the later field
/// wins.
///
/// # Errors
/// Returns an ingestion error for malformed quoting or non-UTF-8 content.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| DataProbeError::ingestion_failed("CSV parsing error in header row", e))?
        .clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            DataProbeError::ingestion_failed(format!("CSV parsing error in row {index}"), e)
        })?;
        if is_blank(&row) {
            continue;
        }
        records.push(to_record(&headers, &row));
    }

    if records.iter().any(|r| r.len() < headers.len()) {
        tracing::warn!("CSV contains rows with fewer fields than the header");
    }

    Ok(Dataset::new(records))
}

fn to_record(headers: &StringRecord, row: &StringRecord) -> Record {
    headers
        .iter()
        .zip(row.iter())
        .map(|(name, field)| (name, CellValue::text(field)))
        .collect()
}

/// A line holding a single empty field.
fn is_blank(row: &StringRecord) -> bool {
    row.len() == 1 && row.get(0).is_some_and(str::is_empty)
}
