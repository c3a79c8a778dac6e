//! Data quality profiling module.
//!
//! Profiles an in-memory [`Dataset`](crate::models::Dataset) in six
//! strictly ordered stages:
//! - **Column discovery**: ordered union of keys with a non-absent value
//! - **Type inference**: majority vote over boolean, number and date
//! - **Column statistics**: nulls, uniqueness, duplicates, numeric summary
//!   and IQR outliers
//! - **Score aggregation**: completeness, consistency, accuracy, validity
//!   and a weighted overall score
//! - **Issue detection**: threshold rules per column
//! - **Report assembly**
//!
//! The engine is a pure function of the dataset and the configuration.
//! It keeps no state between calls, reads no clock and uses no
//! randomness, so the same input always serializes to the same JSON.
//!
//! # Example
//! ```rust,ignore
//! use dataprobe_core::quality::{QualityAnalyzer, QualityConfig};
//!
//! let analyzer = QualityAnalyzer::new(QualityConfig::default());
//! let report = analyzer.analyze(&dataset);
//! for issue in &report.issues {
//!     println!("[{}] {}", issue.severity, issue.message);
//! }
//! ```

mod analyzer;
mod anomaly;
mod config;
mod discovery;
mod inference;
mod issues;
mod models;
mod scoring;
mod statistics;

// Re-export public API
pub use analyzer::{QualityAnalyzer, analyze_data_quality};
pub use anomaly::{IqrFences, MIN_OUTLIER_SAMPLE, count_outliers, iqr_fences};
pub use config::{
    ConfigValidationError, IssueThresholds, PenaltyRules, QualityConfig, ScoreWeights,
};
pub use discovery::discover_columns;
pub use inference::{infer_data_type, is_date};
pub use issues::{detect_column_issues, detect_issues};
pub use models::{
    ColumnProfile, DataType, Issue, IssueType, QualityReport, QualityScores, Severity,
    percentage, safe_ratio,
};
pub use scoring::{
    accuracy_score, aggregate_scores, completeness_score, consistency_score, overall_score,
    validity_score,
};
pub use statistics::{NumericSummary, count_duplicates, profile_column, profile_columns};
