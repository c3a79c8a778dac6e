//! Quality analyzer facade.
//!
//! This module provides the `QualityAnalyzer` that runs the profiling
//! stages in order (column discovery, column statistics, score
//! aggregation, issue detection) and assembles the report.

use rayon::prelude::*;

use crate::models::Dataset;

use super::config::QualityConfig;
use super::discovery::discover_columns;
use super::issues::detect_issues;
use super::models::{Issue, QualityReport};
use super::scoring::aggregate_scores;
use super::statistics::profile_columns;

/// Quality analyzer for profiling datasets.
///
/// The analyzer holds an immutable [`QualityConfig`] and is cheap to share
/// across threads. Analysis never fails: degenerate input (no rows, no
/// columns, all-absent columns) produces a well-defined report.
///
/// # Example
///
/// ```rust,ignore
/// use dataprobe_core::quality::{QualityAnalyzer, QualityConfig};
///
/// let analyzer = QualityAnalyzer::new(QualityConfig::default());
/// let report = analyzer.analyze(&dataset);
/// println!("Quality score: {}/100", report.overall_score);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer {
    config: QualityConfig,
}

impl QualityAnalyzer {
    /// Creates a new quality analyzer with the given configuration.
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Creates a new quality analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(QualityConfig::default())
    }

    /// Returns a reference to the analyzer configuration.
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Profiles a dataset and returns its quality report.
    ///
    /// An empty dataset yields [`QualityReport::empty`]. Otherwise the
    /// report lists every discovered column in first-appearance order
    /// together with the four sub-scores, the overall score and the
    /// detected issues.
    pub fn analyze(&self, dataset: &Dataset) -> QualityReport {
        if dataset.is_empty() {
            tracing::debug!("Dataset has no rows, returning empty report");
            return QualityReport::empty();
        }

        let columns = discover_columns(dataset);
        let profiles = profile_columns(dataset, &columns, &self.config);
        let scores = aggregate_scores(&profiles, &self.config);
        let issues = detect_issues(&profiles, &self.config.issues);

        let report = QualityReport::new(dataset.len() as u64, profiles, scores, issues);

        tracing::debug!(
            rows = report.total_rows,
            columns = report.total_columns,
            overall = report.overall_score,
            completeness = report.completeness,
            consistency = report.consistency,
            accuracy = report.accuracy,
            validity = report.validity,
            issues = report.issues.len(),
            "Quality analysis complete"
        );

        report
    }

    /// Profiles several independent datasets, returning reports in input order.
    ///
    /// Datasets are analyzed concurrently on the rayon pool when parallel
    /// profiling is enabled.
    pub fn analyze_all(&self, datasets: &[Dataset]) -> Vec<QualityReport> {
        if self.config.parallel {
            datasets.par_iter().map(|d| self.analyze(d)).collect()
        } else {
            datasets.iter().map(|d| self.analyze(d)).collect()
        }
    }

    /// Re-runs issue detection over a finished report's column metrics.
    ///
    /// With the same thresholds this reproduces `report.issues` exactly.
    pub fn detect_issues(&self, report: &QualityReport) -> Vec<Issue> {
        detect_issues(report.column_metrics.values(), &self.config.issues)
    }
}

/// Profiles a dataset with the default configuration.
pub fn analyze_data_quality(dataset: &Dataset) -> QualityReport {
    QualityAnalyzer::with_defaults().analyze(dataset)
}
