//! Score aggregation.
//!
//! Reduces column profiles to four 0-100 sub-scores and a weighted overall
//! score. Completeness is an average; consistency, accuracy and validity
//! start at 100 and lose a fixed penalty per offending column. Penalties
//! are additive across columns and are not capped per column. With no
//! columns every score is 0.

use super::config::{PenaltyRules, QualityConfig, ScoreWeights};
use super::models::{ColumnProfile, DataType, QualityScores};

const MAX_SCORE: u64 = 100;

/// Clamps to [0, 100] and rounds half up.
fn round_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, MAX_SCORE as f64).round() as u8
}

/// 100 minus the summed per-column penalties, floored at 0.
fn penalized<F>(profiles: &[ColumnProfile], penalty: F) -> u8
where
    F: Fn(&ColumnProfile) -> u32,
{
    if profiles.is_empty() {
        return 0;
    }
    let total: u64 = profiles.iter().map(|p| u64::from(penalty(p))).sum();
    // bounded by MAX_SCORE
    MAX_SCORE.saturating_sub(total) as u8
}

/// Inverse of the mean null percentage across columns.
pub fn completeness_score(profiles: &[ColumnProfile]) -> u8 {
    if profiles.is_empty() {
        return 0;
    }
    let mean_null =
        profiles.iter().map(|p| p.null_percentage).sum::<f64>() / profiles.len() as f64;
    round_score(100.0 - mean_null)
}

/// Penalizes sparse columns and low-uniqueness non-boolean columns.
pub fn consistency_score(profiles: &[ColumnProfile], rules: &PenaltyRules) -> u8 {
    penalized(profiles, |col| {
        let mut penalty = 0;
        if col.null_percentage > rules.sparse_null_pct {
            penalty += rules.sparse_penalty;
        }
        if col.uniqueness < rules.low_uniqueness_pct && col.data_type != DataType::Boolean {
            penalty += rules.low_uniqueness_penalty;
        }
        penalty
    })
}

/// Penalizes outlier-heavy and duplicate-heavy columns.
pub fn accuracy_score(profiles: &[ColumnProfile], rules: &PenaltyRules) -> u8 {
    penalized(profiles, |col| {
        let outlier_pct = col.outlier_percentage();
        let mut penalty = if outlier_pct > rules.severe_outlier_pct {
            rules.severe_outlier_penalty
        } else if outlier_pct > rules.moderate_outlier_pct {
            rules.moderate_outlier_penalty
        } else {
            0
        };
        if col.duplicate_percentage() > rules.duplicate_pct {
            penalty += rules.duplicate_penalty;
        }
        penalty
    })
}

/// Penalizes columns whose type could not be inferred.
pub fn validity_score(profiles: &[ColumnProfile], rules: &PenaltyRules) -> u8 {
    penalized(profiles, |col| {
        if col.data_type == DataType::Unknown {
            rules.unknown_type_penalty
        } else {
            0
        }
    })
}

/// Weighted combination of the four sub-scores.
pub fn overall_score(
    completeness: u8,
    consistency: u8,
    accuracy: u8,
    validity: u8,
    weights: &ScoreWeights,
) -> u8 {
    round_score(
        weights.completeness * f64::from(completeness)
            + weights.consistency * f64::from(consistency)
            + weights.accuracy * f64::from(accuracy)
            + weights.validity * f64::from(validity),
    )
}

/// Computes all scores for a set of column profiles.
pub fn aggregate_scores(profiles: &[ColumnProfile], config: &QualityConfig) -> QualityScores {
    let completeness = completeness_score(profiles);
    let consistency = consistency_score(profiles, &config.penalties);
    let accuracy = accuracy_score(profiles, &config.penalties);
    let validity = validity_score(profiles, &config.penalties);

    QualityScores {
        overall_score: overall_score(
            completeness,
            consistency,
            accuracy,
            validity,
            &config.weights,
        ),
        completeness,
        consistency,
        accuracy,
        validity,
    }
}
