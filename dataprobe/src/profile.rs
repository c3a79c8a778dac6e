//! File profiling workflow.
//!
//! Each input is read asynchronously, then decoded and profiled on a
//! blocking task so CPU-bound work never stalls the runtime. Inputs are
//! processed concurrently unless `--sequential` is given; results always
//! come back in input order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dataprobe_core::{
    DataProbeError, InputFormat, Insights, QualityAnalyzer, QualityConfig, QualityReport, Result,
    basic_insights, load_named,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ProfileArgs;
use crate::output::write_output;
use crate::render::render;

/// Profiling result for one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfiledInput {
    /// Input path as given on the command line
    pub source: String,
    /// Quality report of the file
    pub report: QualityReport,
    /// Narrative, when `--insights` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

/// Loads and validates a quality configuration file.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, a serialization error
/// if it is not valid JSON, and a configuration error if any value is out
/// of range.
pub async fn load_config(path: &Path) -> Result<QualityConfig> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        DataProbeError::io(format!("Failed to read config {}", path.display()), e)
    })?;

    let config: QualityConfig = serde_json::from_str(&text).map_err(|e| {
        DataProbeError::serialization(format!("Invalid config {}", path.display()), e)
    })?;

    config.validate().map_err(|e| {
        DataProbeError::configuration(format!("Invalid config {}: {}", path.display(), e))
    })?;

    debug!("Loaded quality configuration from {}", path.display());
    Ok(config)
}

/// Profiles one file.
async fn profile_input(
    path: PathBuf,
    analyzer: Arc<QualityAnalyzer>,
    with_insights: bool,
) -> Result<ProfiledInput> {
    let format = InputFormat::from_path(&path)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| DataProbeError::io(format!("Failed to read {}", path.display()), e))?;

    let source = path.display().to_string();
    let name = source.clone();
    let report = tokio::task::spawn_blocking(move || {
        load_named(&name, &bytes, format).map(|dataset| analyzer.analyze(&dataset))
    })
    .await
    .map_err(|e| DataProbeError::ingestion_failed(format!("Profiling {source} was aborted"), e))??;

    info!(
        "Profiled {}: {} rows, {} columns, score {}/100, {} issues",
        source,
        report.total_rows,
        report.total_columns,
        report.overall_score,
        report.issues.len()
    );

    let insights = with_insights.then(|| basic_insights(&report));
    Ok(ProfiledInput {
        source,
        report,
        insights,
    })
}

/// Profiles all inputs, returning results in input order.
///
/// The first failing input aborts the run.
pub async fn profile_inputs(
    inputs: &[PathBuf],
    config: QualityConfig,
    with_insights: bool,
) -> Result<Vec<ProfiledInput>> {
    let concurrent = config.parallel;
    let analyzer = Arc::new(QualityAnalyzer::new(config));
    let mut results = Vec::with_capacity(inputs.len());

    if concurrent {
        let handles: Vec<_> = inputs
            .iter()
            .map(|path| {
                tokio::spawn(profile_input(
                    path.clone(),
                    Arc::clone(&analyzer),
                    with_insights,
                ))
            })
            .collect();

        for handle in handles {
            let profiled = handle
                .await
                .map_err(|e| DataProbeError::ingestion_failed("Profiling task failed", e))??;
            results.push(profiled);
        }
    } else {
        for path in inputs {
            results.push(profile_input(path.clone(), Arc::clone(&analyzer), with_insights).await?);
        }
    }

    Ok(results)
}

/// Runs the `profile` command end to end.
pub async fn run_profile(args: &ProfileArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path).await?,
        None => QualityConfig::default(),
    };
    if args.sequential {
        config = config.with_parallel(false);
    }

    info!("Profiling {} input(s)", args.inputs.len());
    let profiled = profile_inputs(&args.inputs, config, args.insights).await?;

    let flagged = profiled.iter().filter(|p| !p.report.issues.is_empty()).count();
    if flagged > 0 {
        warn!("{} of {} input(s) have quality issues", flagged, profiled.len());
    }

    let rendered = render(&profiled, args.format)?;
    write_output(&rendered, args.output.as_deref()).await?;

    if let Some(path) = &args.output {
        info!("Report saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dataprobe_core::quality::IssueType;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_profile_inputs_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            write(dir.path(), "b.json", r#"[{"x": 1}, {"x": 2}, {"x": 3}]"#),
            write(dir.path(), "a.csv", "name,age\nAda,36\n,41\n"),
        ];

        let profiled = profile_inputs(&inputs, QualityConfig::default(), false)
            .await
            .unwrap();

        assert_eq!(profiled.len(), 2);
        assert!(profiled[0].source.ends_with("b.json"));
        assert_eq!(profiled[0].report.total_rows, 3);
        assert!(profiled[1].source.ends_with("a.csv"));
        assert_eq!(profiled[1].report.issues_of(IssueType::MissingValues).count(), 1);
        assert!(profiled[1].insights.is_none());
    }

    #[tokio::test]
    async fn test_profile_inputs_sequential_matches_concurrent() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            write(dir.path(), "one.csv", "a,b\n1,x\n2,y\n3,x\n"),
            write(dir.path(), "two.json", r#"{"rows": [{"k": true}, {"k": false}]}"#),
        ];

        let concurrent = profile_inputs(&inputs, QualityConfig::default(), true)
            .await
            .unwrap();
        let sequential =
            profile_inputs(&inputs, QualityConfig::new().with_parallel(false), true)
                .await
                .unwrap();

        assert_eq!(concurrent, sequential);
        assert!(concurrent[0].insights.is_some());
    }

    #[tokio::test]
    async fn test_profile_inputs_rejects_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![write(dir.path(), "sheet.xlsx", "not really a spreadsheet")];

        let err = profile_inputs(&inputs, QualityConfig::default(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DataProbeError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_profile_inputs_reports_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![write(dir.path(), "empty.csv", "a,b\n")];

        let err = profile_inputs(&inputs, QualityConfig::default(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DataProbeError::EmptyInput { .. }));
        assert!(err.to_string().contains("empty.csv"));
    }

    #[tokio::test]
    async fn test_profile_inputs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![dir.path().join("absent.csv")];

        let err = profile_inputs(&inputs, QualityConfig::default(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DataProbeError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_config_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "config.json", r#"{"iqr_multiplier": 3.0}"#);

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.iqr_multiplier, 3.0);
        assert_eq!(config.type_majority, 0.8);
    }

    #[tokio::test]
    async fn test_load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "config.json",
            r#"{"weights": {"completeness": 0.9}}"#,
        );

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, DataProbeError::Configuration { .. }));
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[tokio::test]
    async fn test_load_config_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "config.json", "{ not json");

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, DataProbeError::Serialization { .. }));
    }
}
