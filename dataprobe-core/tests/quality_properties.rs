//! Property tests for the profiling engine.
//!
//! Datasets are generated from a small pool of column names and a mix of
//! absent, boolean, numeric and text cells so that columns are sparse,
//! heterogeneous and frequently repeated.

use dataprobe_core::quality::{QualityAnalyzer, QualityConfig};
use dataprobe_core::{CellValue, Dataset, Record};
use proptest::prelude::*;

const COLUMNS: &[&str] = &["id", "name", "amount", "flag", "when", "notes"];

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        2 => Just(CellValue::Absent),
        1 => any::<bool>().prop_map(CellValue::Boolean),
        3 => (-1_000i32..1_000).prop_map(|n| CellValue::Number(f64::from(n))),
        1 => (-1e6f64..1e6).prop_map(CellValue::Number),
        2 => "[a-z]{0,6}".prop_map(CellValue::text),
        1 => prop::sample::select(vec!["2024-01-15", "2023-12-31", "true", " 42 ", "n/a"])
            .prop_map(CellValue::text),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::vec(
        (prop::sample::select(COLUMNS.to_vec()), cell_strategy()),
        0..COLUMNS.len(),
    )
    .prop_map(|fields| fields.into_iter().collect())
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(Dataset::new)
}

proptest! {
    /// Every score stays within 0-100.
    #[test]
    fn property_scores_in_range(data in dataset_strategy()) {
        let report = QualityAnalyzer::with_defaults().analyze(&data);
        for score in [
            report.overall_score,
            report.completeness,
            report.consistency,
            report.accuracy,
            report.validity,
        ] {
            prop_assert!(score <= 100);
        }
    }

    /// Per-column counts are consistent with each other and the dataset.
    #[test]
    fn property_count_invariants(data in dataset_strategy()) {
        let report = QualityAnalyzer::with_defaults().analyze(&data);
        prop_assert_eq!(report.total_rows, data.len() as u64);
        prop_assert_eq!(report.total_columns, report.column_metrics.len() as u64);

        for col in report.column_metrics.values() {
            prop_assert_eq!(col.total_count, data.len() as u64);
            prop_assert_eq!(col.null_count + col.non_null_count, col.total_count);
            prop_assert!(col.unique_count <= col.non_null_count);
            prop_assert!(col.non_null_count > 0);
            prop_assert!(col.duplicates < col.total_count);
            prop_assert!(col.outliers <= col.non_null_count);
            prop_assert!((0.0..=100.0).contains(&col.null_percentage));
            prop_assert!((0.0..=100.0).contains(&col.uniqueness));
        }
    }

    /// The same dataset always serializes to the same report.
    #[test]
    fn property_deterministic_json(data in dataset_strategy()) {
        let parallel = QualityAnalyzer::with_defaults();
        let sequential = QualityAnalyzer::new(QualityConfig::new().with_parallel(false));

        let first = serde_json::to_string(&parallel.analyze(&data)).unwrap();
        let second = serde_json::to_string(&parallel.analyze(&data)).unwrap();
        let third = serde_json::to_string(&sequential.analyze(&data)).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &third);
    }

    /// Columns appear in first-appearance order of a non-absent value.
    #[test]
    fn property_column_order(data in dataset_strategy()) {
        let mut expected: Vec<&str> = Vec::new();
        for record in data.records() {
            for (name, value) in record.iter() {
                if !value.is_absent() && !expected.contains(&name) {
                    expected.push(name);
                }
            }
        }

        let report = QualityAnalyzer::with_defaults().analyze(&data);
        let actual: Vec<&str> = report.column_metrics.keys().map(String::as_str).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Re-running issue detection reproduces the report's issues.
    #[test]
    fn property_issue_detection_idempotent(data in dataset_strategy()) {
        let analyzer = QualityAnalyzer::with_defaults();
        let report = analyzer.analyze(&data);
        prop_assert_eq!(analyzer.detect_issues(&report), report.issues);
    }

    /// Numeric summaries only exist for numeric columns and are ordered.
    #[test]
    fn property_numeric_summary_bounds(data in dataset_strategy()) {
        let report = QualityAnalyzer::with_defaults().analyze(&data);
        for col in report.column_metrics.values() {
            match (col.min, col.mean, col.max) {
                (Some(min), Some(mean), Some(max)) => {
                    prop_assert_eq!(col.data_type.as_str(), "number");
                    prop_assert!(min <= max);
                    prop_assert!(min - 1e-6 <= mean && mean <= max + 1e-6);
                }
                (None, None, None) => {
                    prop_assert_eq!(col.outliers, 0);
                }
                _ => {
                    prop_assert!(false, "partial numeric summary in {}", col.name);
                }
            }
        }
    }
}
