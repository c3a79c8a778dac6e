//! Issue detection.
//!
//! Turns column profiles into a flat list of issues. Columns are visited
//! in the order given and, within a column, rules fire in a fixed order
//! (missing values, outliers, duplicates, low uniqueness). The result
//! depends only on the profiles, so running it again on a finished
//! report yields the same list.

use super::config::IssueThresholds;
use super::models::{ColumnProfile, DataType, Issue, IssueType, Severity, safe_ratio};

/// Formats a percentage with one decimal, rounding ties up (31.25 is "31.3").
fn format_pct(pct: f64) -> String {
    format!("{:.1}", (pct * 10.0).round() / 10.0)
}

/// Raises `missing_values` when the null percentage exceeds the threshold.
fn missing_values(col: &ColumnProfile, thresholds: &IssueThresholds) -> Option<Issue> {
    if col.null_percentage <= thresholds.missing_pct {
        return None;
    }
    let severity = if col.null_percentage > thresholds.missing_high_pct {
        Severity::High
    } else {
        Severity::Medium
    };
    Some(Issue::new(
        IssueType::MissingValues,
        severity,
        &col.name,
        format!(
            "{}% of values are missing in \"{}\"",
            format_pct(col.null_percentage),
            col.name
        ),
    ))
}

fn outliers(col: &ColumnProfile, thresholds: &IssueThresholds) -> Option<Issue> {
    let ratio = safe_ratio(col.outliers as f64, col.non_null_count as f64);
    (col.outliers > 0 && ratio > thresholds.outlier_ratio).then(|| {
        Issue::new(
            IssueType::Outliers,
            Severity::Medium,
            &col.name,
            format!("{} outliers detected in \"{}\"", col.outliers, col.name),
        )
    })
}

fn duplicates(col: &ColumnProfile, thresholds: &IssueThresholds) -> Option<Issue> {
    let ratio = safe_ratio(col.duplicates as f64, col.total_count as f64);
    (col.duplicates > 0 && ratio > thresholds.duplicate_ratio).then(|| {
        Issue::new(
            IssueType::Duplicates,
            Severity::Medium,
            &col.name,
            format!("{} duplicate values found in \"{}\"", col.duplicates, col.name),
        )
    })
}

/// Boolean columns are exempt; two distinct values is their normal state.
fn low_uniqueness(col: &ColumnProfile, thresholds: &IssueThresholds) -> Option<Issue> {
    (col.uniqueness < thresholds.low_uniqueness_pct && col.data_type != DataType::Boolean).then(
        || {
            Issue::new(
                IssueType::LowUniqueness,
                Severity::Low,
                &col.name,
                format!(
                    "Low uniqueness ({}%) in \"{}\"",
                    format_pct(col.uniqueness),
                    col.name
                ),
            )
        },
    )
}

/// Detects issues for a single column, in rule order.
pub fn detect_column_issues(col: &ColumnProfile, thresholds: &IssueThresholds) -> Vec<Issue> {
    [
        missing_values(col, thresholds),
        outliers(col, thresholds),
        duplicates(col, thresholds),
        low_uniqueness(col, thresholds),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Detects issues across columns, in the order the columns are given.
pub fn detect_issues<'a, I>(profiles: I, thresholds: &IssueThresholds) -> Vec<Issue>
where
    I: IntoIterator<Item = &'a ColumnProfile>,
{
    profiles
        .into_iter()
        .flat_map(|col| detect_column_issues(col, thresholds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            data_type: DataType::Number,
            total_count: 100,
            non_null_count: 100,
            null_count: 0,
            null_percentage: 0.0,
            unique_count: 100,
            uniqueness: 100.0,
            outliers: 0,
            duplicates: 0,
            min: None,
            max: None,
            mean: None,
        }
    }

    fn detect(profiles: &[ColumnProfile]) -> Vec<Issue> {
        detect_issues(profiles, &IssueThresholds::default())
    }

    #[test]
    fn test_clean_column_has_no_issues() {
        assert!(detect(&[col("id")]).is_empty());
    }

    #[test]
    fn test_missing_values_severity() {
        let medium = ColumnProfile {
            null_percentage: 100.0 / 3.0,
            ..col("name")
        };
        let high = ColumnProfile {
            null_percentage: 75.0,
            ..col("email")
        };
        let issues = detect(&[medium, high]);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].issue_type, IssueType::MissingValues);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].message, "33.3% of values are missing in \"name\"");
        assert_eq!(issues[1].severity, Severity::High);
        assert_eq!(issues[1].message, "75.0% of values are missing in \"email\"");
    }

    #[test]
    fn test_percentages_round_ties_up() {
        // 5 of 16 rows missing
        let missing = ColumnProfile {
            total_count: 16,
            non_null_count: 11,
            null_count: 5,
            null_percentage: 31.25,
            ..col("v")
        };
        let repetitive = ColumnProfile {
            data_type: DataType::Text,
            uniqueness: 1.25,
            ..col("status")
        };
        let issues = detect(&[missing, repetitive]);

        assert_eq!(issues[0].message, "31.3% of values are missing in \"v\"");
        assert_eq!(issues[1].message, "Low uniqueness (1.3%) in \"status\"");
        assert_eq!(format_pct(6.25), "6.3");
        assert_eq!(format_pct(0.0), "0.0");
    }

    #[test]
    fn test_missing_values_threshold_is_exclusive() {
        let at_threshold = ColumnProfile {
            null_percentage: 20.0,
            ..col("a")
        };
        let at_high = ColumnProfile {
            null_percentage: 50.0,
            ..col("b")
        };
        let issues = detect(&[at_threshold, at_high]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].column, "b");
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_outliers_ratio_of_non_null_values() {
        // 1 of 5 = 0.2
        let small = ColumnProfile {
            total_count: 5,
            non_null_count: 5,
            outliers: 1,
            ..col("n")
        };
        let issues = detect(&[small]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::Outliers);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].message, "1 outliers detected in \"n\"");

        // 5 of 100 = 0.05, not above the threshold
        let borderline = ColumnProfile {
            outliers: 5,
            ..col("m")
        };
        assert!(detect(&[borderline]).is_empty());
    }

    #[test]
    fn test_duplicates_ratio_of_all_rows() {
        let dup = ColumnProfile {
            duplicates: 11,
            ..col("city")
        };
        let issues = detect(&[dup]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "11 duplicate values found in \"city\"");

        let borderline = ColumnProfile {
            duplicates: 10,
            ..col("city")
        };
        assert!(detect(&[borderline]).is_empty());
    }

    #[test]
    fn test_low_uniqueness() {
        let repetitive = ColumnProfile {
            data_type: DataType::Text,
            uniqueness: 2.0,
            ..col("status")
        };
        let issues = detect(&[repetitive]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::LowUniqueness);
        assert_eq!(issues[0].severity, Severity::Low);
        assert_eq!(issues[0].message, "Low uniqueness (2.0%) in \"status\"");
    }

    #[test]
    fn test_low_uniqueness_skips_booleans() {
        let flag = ColumnProfile {
            data_type: DataType::Boolean,
            uniqueness: 2.0,
            ..col("active")
        };
        assert!(detect(&[flag]).is_empty());
    }

    #[test]
    fn test_rule_order_within_column() {
        let messy = ColumnProfile {
            data_type: DataType::Text,
            null_percentage: 60.0,
            null_count: 60,
            non_null_count: 40,
            outliers: 10,
            duplicates: 80,
            uniqueness: 2.5,
            ..col("messy")
        };
        let kinds: Vec<_> = detect(&[messy]).iter().map(|i| i.issue_type).collect();
        assert_eq!(
            kinds,
            vec![
                IssueType::MissingValues,
                IssueType::Outliers,
                IssueType::Duplicates,
                IssueType::LowUniqueness,
            ]
        );
    }

    #[test]
    fn test_column_order_is_preserved() {
        let a = ColumnProfile {
            null_percentage: 30.0,
            ..col("zeta")
        };
        let b = ColumnProfile {
            null_percentage: 30.0,
            ..col("alpha")
        };
        let columns: Vec<_> = detect(&[a, b]).into_iter().map(|i| i.column).collect();
        assert_eq!(columns, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_zero_denominators_never_raise() {
        let empty = ColumnProfile {
            total_count: 0,
            non_null_count: 0,
            outliers: 0,
            duplicates: 0,
            uniqueness: 0.0,
            data_type: DataType::Unknown,
            ..col("ghost")
        };
        // Only low uniqueness can fire on an all-zero profile
        let issues = detect(&[empty]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::LowUniqueness);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = IssueThresholds {
            missing_pct: 5.0,
            ..IssueThresholds::default()
        };
        let col = ColumnProfile {
            null_percentage: 10.0,
            ..col("a")
        };
        assert_eq!(detect_issues([&col], &thresholds).len(), 1);
    }
}
