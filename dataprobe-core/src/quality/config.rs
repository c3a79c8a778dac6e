//! Quality assessment configuration.
//!
//! Score weights, penalty rules and issue thresholds are gathered into one
//! immutable [`QualityConfig`] that is handed to the analyzer. Defaults
//! reproduce the standard scoring model; a JSON file may override any
//! subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when checking that score weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the four sub-scores in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the completeness score
    pub completeness: f64,
    /// Weight of the consistency score
    pub consistency: f64,
    /// Weight of the accuracy score
    pub accuracy: f64,
    /// Weight of the validity score
    pub validity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completeness: 0.30,
            consistency: 0.25,
            accuracy: 0.25,
            validity: 0.20,
        }
    }
}

impl ScoreWeights {
    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.completeness + self.consistency + self.accuracy + self.validity
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("completeness", self.completeness),
            ("consistency", self.consistency),
            ("accuracy", self.accuracy),
            ("validity", self.validity),
        ]
    }
}

/// Per-column penalties subtracted from the rule-based sub-scores.
///
/// Percent thresholds are on a 0-100 scale and are exclusive (a column
/// must exceed or fall below them strictly).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyRules {
    /// Null percentage above which a column counts as sparse (consistency)
    pub sparse_null_pct: f64,
    /// Points subtracted per sparse column
    pub sparse_penalty: u32,
    /// Uniqueness percentage below which a non-boolean column is penalized (consistency)
    pub low_uniqueness_pct: f64,
    /// Points subtracted per low-uniqueness column
    pub low_uniqueness_penalty: u32,
    /// Outlier percentage above which the severe penalty applies (accuracy)
    pub severe_outlier_pct: f64,
    /// Points subtracted per column with severe outliers
    pub severe_outlier_penalty: u32,
    /// Outlier percentage above which the moderate penalty applies (accuracy)
    pub moderate_outlier_pct: f64,
    /// Points subtracted per column with moderate outliers
    pub moderate_outlier_penalty: u32,
    /// Duplicate percentage of all rows above which a column is penalized (accuracy)
    pub duplicate_pct: f64,
    /// Points subtracted per heavily duplicated column
    pub duplicate_penalty: u32,
    /// Penalty per column whose type could not be inferred (validity)
    pub unknown_type_penalty: u32,
}

impl Default for PenaltyRules {
    fn default() -> Self {
        Self {
            sparse_null_pct: 50.0,
            sparse_penalty: 10,
            low_uniqueness_pct: 10.0,
            low_uniqueness_penalty: 5,
            severe_outlier_pct: 10.0,
            severe_outlier_penalty: 15,
            moderate_outlier_pct: 5.0,
            moderate_outlier_penalty: 5,
            duplicate_pct: 20.0,
            duplicate_penalty: 10,
            unknown_type_penalty: 10,
        }
    }
}

impl PenaltyRules {
    fn percent_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("penalties.sparse_null_pct", self.sparse_null_pct),
            ("penalties.low_uniqueness_pct", self.low_uniqueness_pct),
            ("penalties.severe_outlier_pct", self.severe_outlier_pct),
            ("penalties.moderate_outlier_pct", self.moderate_outlier_pct),
            ("penalties.duplicate_pct", self.duplicate_pct),
        ]
    }
}

/// Thresholds that turn column statistics into reported issues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueThresholds {
    /// Null percentage above which `missing_values` is raised
    pub missing_pct: f64,
    /// Null percentage above which `missing_values` is high severity
    pub missing_high_pct: f64,
    /// Fraction of non-null values that must be outliers (0-1)
    pub outlier_ratio: f64,
    /// Fraction of all rows that must be redundant repeats (0-1)
    pub duplicate_ratio: f64,
    /// Uniqueness percentage below which `low_uniqueness` is raised
    pub low_uniqueness_pct: f64,
}

impl Default for IssueThresholds {
    fn default() -> Self {
        Self {
            missing_pct: 20.0,
            missing_high_pct: 50.0,
            outlier_ratio: 0.05,
            duplicate_ratio: 0.1,
            low_uniqueness_pct: 5.0,
        }
    }
}

/// Quality assessment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Share of values (0-1] a type bucket needs to win type inference
    pub type_majority: f64,
    /// Multiplier applied to the IQR to place the outlier fences
    pub iqr_multiplier: f64,
    /// Profile columns on the rayon thread pool
    pub parallel: bool,
    /// Overall score weights
    pub weights: ScoreWeights,
    /// Sub-score penalty rules
    pub penalties: PenaltyRules,
    /// Issue detection thresholds
    pub issues: IssueThresholds,
}

/// Validation errors for quality configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("type_majority must be in (0.0, 1.0], got {0}")]
    InvalidTypeMajority(f64),
    #[error("iqr_multiplier must be finite and non-negative, got {0}")]
    InvalidIqrMultiplier(f64),
    #[error("weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("{name} must be between 0 and 100, got {value}")]
    InvalidPercent { name: &'static str, value: f64 },
    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    InvalidRatio { name: &'static str, value: f64 },
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            type_majority: 0.8,
            iqr_multiplier: 1.5,
            parallel: true,
            weights: ScoreWeights::default(),
            penalties: PenaltyRules::default(),
            issues: IssueThresholds::default(),
        }
    }
}

impl QualityConfig {
    /// Creates a new quality config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the type inference majority.
    pub fn with_type_majority(mut self, majority: f64) -> Self {
        if !(majority > 0.0 && majority <= 1.0) {
            tracing::warn!(
                "type_majority {} clamped to valid range (0.0, 1.0]",
                majority
            );
        }
        self.type_majority = if majority.is_nan() {
            1.0
        } else {
            majority.clamp(f64::EPSILON, 1.0)
        };
        self
    }

    /// Builder method to set the IQR fence multiplier.
    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        if !(multiplier.is_finite() && multiplier >= 0.0) {
            tracing::warn!("iqr_multiplier {} clamped to 0.0", multiplier);
            self.iqr_multiplier = 0.0;
        } else {
            self.iqr_multiplier = multiplier;
        }
        self
    }

    /// Builder method to enable/disable column-parallel profiling.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to set score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder method to set penalty rules.
    pub fn with_penalties(mut self, penalties: PenaltyRules) -> Self {
        self.penalties = penalties;
        self
    }

    /// Builder method to set issue thresholds.
    pub fn with_issue_thresholds(mut self, issues: IssueThresholds) -> Self {
        self.issues = issues;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first field found outside its valid range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.type_majority > 0.0 && self.type_majority <= 1.0) {
            return Err(ConfigValidationError::InvalidTypeMajority(
                self.type_majority,
            ));
        }
        if !(self.iqr_multiplier.is_finite() && self.iqr_multiplier >= 0.0) {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        for (name, value) in self.weights.named() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigValidationError::InvalidWeight { name, value });
            }
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigValidationError::WeightSum(total));
        }

        let issue_percents = [
            ("issues.missing_pct", self.issues.missing_pct),
            ("issues.missing_high_pct", self.issues.missing_high_pct),
            ("issues.low_uniqueness_pct", self.issues.low_uniqueness_pct),
        ];
        for (name, value) in self.penalties.percent_fields().into_iter().chain(issue_percents) {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigValidationError::InvalidPercent { name, value });
            }
        }

        let ratios = [
            ("issues.outlier_ratio", self.issues.outlier_ratio),
            ("issues.duplicate_ratio", self.issues.duplicate_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidRatio { name, value });
            }
        }

        Ok(())
    }
}
