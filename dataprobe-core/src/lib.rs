//! Core data structures and profiling engine for DataProbe.
//!
//! This crate provides the data quality engine together with the layers
//! around it that the `dataprobe` binary needs: input decoding, a
//! plain-language summary of reports, logging setup and error types.
//!
//! # Guarantees
//! - Profiling is a pure function of the dataset and configuration
//! - No timestamps, randomness or hidden state in reports
//! - Offline operation; no network access
//!
//! # Architecture
//! - [`models`]: the closed cell variant, records and datasets
//! - [`quality`]: column discovery, type inference, statistics, scoring,
//!   issue detection and report assembly
//! - [`ingest`]: CSV and JSON decoding into datasets
//! - [`insights`]: deterministic narrative built from a report

pub mod error;
pub mod ingest;
pub mod insights;
pub mod logging;
pub mod models;
pub mod quality;

// Re-export commonly used types
pub use error::{DataProbeError, Result};
pub use ingest::{InputFormat, load, load_named, load_path};
pub use insights::{Insights, basic_insights};
pub use logging::{LogFormat, init_logging};
pub use models::{CellValue, Dataset, Record};
pub use quality::{QualityAnalyzer, QualityConfig, QualityReport, analyze_data_quality};
