//! JSON decoding.

use serde_json::Value;

use crate::models::{Dataset, json_kind};
use crate::{DataProbeError, Result};

/// Decodes a JSON document into a dataset.
///
/// Accepted shapes:
/// - an array of objects, one row per element
/// - an object with exactly one key holding an array, e.g. `{"rows": [...]}`
/// - any other object, taken as a single row
///
/// Key order within each row is preserved. Nested arrays and objects
/// become their compact JSON text.
///
/// # Errors
/// Returns an ingestion error for malformed JSON or a top-level scalar,
/// and `InvalidRow` for array elements that are not objects.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| DataProbeError::ingestion_failed("JSON parsing error", e))?;

    let rows = match document {
        Value::Array(rows) => rows,
        Value::Object(object) => {
            if object.len() == 1 && object.values().all(Value::is_array) {
                match object.into_iter().next() {
                    Some((_, Value::Array(rows))) => rows,
                    _ => Vec::new(),
                }
            } else {
                vec![Value::Object(object)]
            }
        }
        other => {
            return Err(DataProbeError::malformed_input(
                "JSON parsing error",
                format!("JSON must be an object or array, found {}", json_kind(&other)),
            ));
        }
    };

    Dataset::from_json_rows(rows)
}
