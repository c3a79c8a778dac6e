//! Data quality report models.
//!
//! Field names serialize in camelCase (`overallScore`, `columnMetrics`,
//! `nullPercentage`, ...). These names and the four-way score split are
//! what renderers and narrative generators bind to.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Divides, returning 0 for a zero denominator instead of NaN or infinity.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `100 * part / whole` for counts, 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    100.0 * safe_ratio(part as f64, whole as f64)
}

/// Semantic type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// `true`/`false` values
    Boolean,
    /// Finite numbers, including numeric text
    Number,
    /// Text matching the date grammar
    Date,
    /// Anything else, or no majority
    Text,
    /// No non-absent values to infer from
    Unknown,
}

impl DataType {
    /// Lowercase name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Text => "text",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Column name
    pub name: String,
    /// Inferred semantic type
    pub data_type: DataType,
    /// Dataset row count
    pub total_count: u64,
    /// Count of non-absent values
    pub non_null_count: u64,
    /// Count of absent values
    pub null_count: u64,
    /// Absent values as a percentage of all rows (0-100)
    pub null_percentage: f64,
    /// Distinct non-absent values
    pub unique_count: u64,
    /// Distinct values as a percentage of non-absent values (0-100)
    pub uniqueness: f64,
    /// IQR outliers, numeric columns only
    pub outliers: u64,
    /// Redundant repeats across all rows, absent values included
    pub duplicates: u64,
    /// Smallest parseable value, numeric columns only
    pub min: Option<f64>,
    /// Largest parseable value, numeric columns only
    pub max: Option<f64>,
    /// Arithmetic mean of parseable values, numeric columns only
    pub mean: Option<f64>,
}

impl ColumnProfile {
    /// Outliers as a percentage of non-absent values.
    pub fn outlier_percentage(&self) -> f64 {
        percentage(self.outliers, self.non_null_count)
    }

    /// Duplicates as a percentage of all rows.
    pub fn duplicate_percentage(&self) -> f64 {
        percentage(self.duplicates, self.total_count)
    }
}

/// Category of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Too many absent values
    MissingValues,
    /// IQR outliers in a numeric column
    Outliers,
    /// Repeated values across rows
    Duplicates,
    /// Few distinct values
    LowUniqueness,
}

impl IssueType {
    /// snake_case name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::MissingValues => "missing_values",
            IssueType::Outliers => "outliers",
            IssueType::Duplicates => "duplicates",
            IssueType::LowUniqueness => "low_uniqueness",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity level of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth a look
    Low,
    /// Likely affects analysis
    Medium,
    /// Column is mostly unusable
    High,
}

impl Severity {
    /// Lowercase name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected quality problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule that raised the issue
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// How serious the issue is
    pub severity: Severity,
    /// Affected column
    pub column: String,
    /// Human readable description
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(
        issue_type: IssueType,
        severity: Severity,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            issue_type,
            severity,
            column: column.into(),
            message: message.into(),
        }
    }
}

/// The four sub-scores and their weighted combination, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScores {
    /// Weighted combination of the four sub-scores
    pub overall_score: u8,
    /// Share of present values
    pub completeness: u8,
    /// Penalized for sparse and low-uniqueness columns
    pub consistency: u8,
    /// Penalized for outliers and duplicates
    pub accuracy: u8,
    /// Penalized for columns with no inferable type
    pub validity: u8,
}

/// Complete quality report for one dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// Weighted combination of the four sub-scores (0-100)
    pub overall_score: u8,
    /// Completeness sub-score (0-100)
    pub completeness: u8,
    /// Consistency sub-score (0-100)
    pub consistency: u8,
    /// Accuracy sub-score (0-100)
    pub accuracy: u8,
    /// Validity sub-score (0-100)
    pub validity: u8,
    /// Per-column statistics in column discovery order
    pub column_metrics: IndexMap<String, ColumnProfile>,
    /// Issues in column order, then rule order
    pub issues: Vec<Issue>,
    /// Number of records in the dataset
    pub total_rows: u64,
    /// Number of discovered columns
    pub total_columns: u64,
}

impl QualityReport {
    /// Report for a dataset with no rows: every score and collection empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assembles a report from profiled columns, scores and issues.
    pub fn new(
        total_rows: u64,
        profiles: Vec<ColumnProfile>,
        scores: QualityScores,
        issues: Vec<Issue>,
    ) -> Self {
        let total_columns = profiles.len() as u64;
        let column_metrics = profiles
            .into_iter()
            .map(|profile| (profile.name.clone(), profile))
            .collect();

        Self {
            overall_score: scores.overall_score,
            completeness: scores.completeness,
            consistency: scores.consistency,
            accuracy: scores.accuracy,
            validity: scores.validity,
            column_metrics,
            issues,
            total_rows,
            total_columns,
        }
    }

    /// The score block of this report.
    pub fn scores(&self) -> QualityScores {
        QualityScores {
            overall_score: self.overall_score,
            completeness: self.completeness,
            consistency: self.consistency,
            accuracy: self.accuracy,
            validity: self.validity,
        }
    }

    /// Looks up a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_metrics.get(name)
    }

    /// Issues of one type, in report order.
    pub fn issues_of(&self, issue_type: IssueType) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.issue_type == issue_type)
    }
}
