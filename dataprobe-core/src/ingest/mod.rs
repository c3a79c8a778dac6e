//! Input decoding for the profiling engine.
//!
//! Turns raw file contents into a [`Dataset`]. The engine never calls into
//! this module; it only sees the decoded records.
//!
//! # Module Structure
//! - `delimited`: CSV with a header row
//! - `json`: JSON arrays of objects, wrapped arrays and single objects
//!
//! No type coercion happens here. CSV fields are always text and JSON
//! scalars keep their JSON type; the engine infers semantic types later.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Dataset;
use crate::{DataProbeError, Result};

mod delimited;
mod json;

pub use delimited::parse_csv;
pub use json::parse_json;

/// Source name used when the caller has none.
const DEFAULT_SOURCE_NAME: &str = "File";

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON document
    Json,
}

impl InputFormat {
    /// Detects the format from a file extension, case-insensitively.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for any extension other than `csv` or
    /// `json`, including spreadsheet formats.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(DataProbeError::unsupported_format(extension)),
        }
    }

    /// Lowercase name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes raw input into a non-empty dataset.
///
/// # Errors
/// Returns an ingestion error if the input cannot be decoded and
/// `EmptyInput` if it decodes to zero rows.
pub fn load(bytes: &[u8], format: InputFormat) -> Result<Dataset> {
    load_named(DEFAULT_SOURCE_NAME, bytes, format)
}

/// Like [`load`], naming the source in error messages.
pub fn load_named(source_name: &str, bytes: &[u8], format: InputFormat) -> Result<Dataset> {
    let dataset = match format {
        InputFormat::Csv => parse_csv(bytes)?,
        InputFormat::Json => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                DataProbeError::ingestion_failed(format!("{source_name} is not valid UTF-8"), e)
            })?;
            parse_json(text)?
        }
    };

    if dataset.is_empty() {
        return Err(DataProbeError::empty_input(source_name));
    }

    tracing::debug!(
        source = source_name,
        format = %format,
        rows = dataset.len(),
        "Decoded input"
    );

    Ok(dataset)
}

/// Reads and decodes a file, detecting the format from its extension.
///
/// # Errors
/// Returns `UnsupportedFormat` before touching the file if the extension is
/// not recognized, and an I/O error if the file cannot be read.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let format = InputFormat::from_path(path)?;
    let bytes = std::fs::read(path)
        .map_err(|e| DataProbeError::io(format!("Failed to read {}", path.display()), e))?;
    load_named(&path.display().to_string(), &bytes, format)
}
