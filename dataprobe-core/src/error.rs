//! Error types for DataProbe.
//!
//! The profiling engine itself never fails: every dataset, including an
//! empty one, yields a well-defined report. Errors only arise in the
//! surrounding layers - configuration loading, ingestion of raw input,
//! logging setup and file output.

use thiserror::Error;

/// Main error type for DataProbe operations.
#[derive(Debug, Error)]
pub enum DataProbeError {
    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input could not be decoded into a dataset
    #[error("Ingestion failed: {context}")]
    Ingestion {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input file type is not one we can decode
    #[error("Unsupported file format: '{extension}'. Please use CSV or JSON format")]
    UnsupportedFormat { extension: String },

    /// Decoded input contained no rows
    #[error("{source_name} appears to be empty or could not be parsed")]
    EmptyInput { source_name: String },

    /// A decoded row does not have the record shape
    #[error("Row {index} is not a record: {reason}")]
    InvalidRow { index: usize, reason: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with DataProbeError
pub type Result<T> = std::result::Result<T, DataProbeError>;

impl DataProbeError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an ingestion error with context
    pub fn ingestion_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Ingestion {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates an ingestion error from a plain reason with no underlying error
    pub fn malformed_input(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Ingestion {
            context: context.into(),
            source: reason.into().into(),
        }
    }

    /// Creates an unsupported format error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Creates an empty input error
    pub fn empty_input(source_name: impl Into<String>) -> Self {
        Self::EmptyInput {
            source_name: source_name.into(),
        }
    }

    /// Creates an invalid row error
    pub fn invalid_row(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            index,
            reason: reason.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}
