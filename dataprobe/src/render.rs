//! Report rendering.

use dataprobe_core::quality::ColumnProfile;
use dataprobe_core::{DataProbeError, Insights, QualityConfig, Result};

use crate::ReportFormat;
use crate::profile::ProfiledInput;

/// Renders profiled inputs in the requested format.
pub fn render(profiled: &[ProfiledInput], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => render_json(profiled),
        ReportFormat::Markdown => Ok(render_markdown(profiled)),
    }
}

/// Pretty-printed JSON.
///
/// A single input renders as one object; several render as an array in
/// input order.
pub fn render_json(profiled: &[ProfiledInput]) -> Result<String> {
    let rendered = match profiled {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    rendered.map_err(|e| DataProbeError::serialization("Failed to serialize report", e))
}

/// Pretty-printed JSON of a quality configuration.
pub fn render_config(config: &QualityConfig) -> Result<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| DataProbeError::serialization("Failed to serialize configuration", e))
}

/// Markdown report, one section per input.
pub fn render_markdown(profiled: &[ProfiledInput]) -> String {
    let sections: Vec<String> = profiled.iter().map(markdown_section).collect();
    sections.join("\n")
}

fn markdown_section(input: &ProfiledInput) -> String {
    let report = &input.report;
    let mut out = format!("# Data Quality Report: {}\n\n", escape(&input.source));

    out.push_str(&format!(
        "**Rows:** {} | **Columns:** {} | **Overall score:** {}/100\n\n",
        report.total_rows, report.total_columns, report.overall_score
    ));

    out.push_str("## Scores\n\n| Dimension | Score |\n|---|---:|\n");
    for (name, score) in [
        ("Completeness", report.completeness),
        ("Consistency", report.consistency),
        ("Accuracy", report.accuracy),
        ("Validity", report.validity),
        ("Overall", report.overall_score),
    ] {
        out.push_str(&format!("| {name} | {score} |\n"));
    }

    if !report.column_metrics.is_empty() {
        out.push_str("\n## Columns\n\n");
        out.push_str(
            "| Column | Type | Missing | Missing % | Unique | Uniqueness % | Outliers | Duplicates | Min | Max | Mean |\n",
        );
        out.push_str("|---|---|---:|---:|---:|---:|---:|---:|---:|---:|---:|\n");
        for column in report.column_metrics.values() {
            out.push_str(&column_row(column));
        }
    }

    out.push_str("\n## Issues\n\n");
    if report.issues.is_empty() {
        out.push_str("No issues detected.\n");
    } else {
        for issue in &report.issues {
            out.push_str(&format!(
                "- **{}** `{}` ({}): {}\n",
                issue.severity.as_str(),
                escape(&issue.column),
                issue.issue_type.as_str(),
                issue.message
            ));
        }
    }

    if let Some(insights) = &input.insights {
        out.push_str(&insights_section(insights));
    }

    out
}

fn column_row(column: &ColumnProfile) -> String {
    format!(
        "| {} | {} | {} | {:.1} | {} | {:.1} | {} | {} | {} | {} | {} |\n",
        escape(&column.name),
        column.data_type.as_str(),
        column.null_count,
        column.null_percentage,
        column.unique_count,
        column.uniqueness,
        column.outliers,
        column.duplicates,
        optional_number(column.min),
        optional_number(column.max),
        optional_number(column.mean),
    )
}

fn insights_section(insights: &Insights) -> String {
    let mut out = format!("\n## Insights\n\n{}\n", insights.summary);

    if !insights.issues.is_empty() {
        out.push_str("\n### Key Issues\n\n");
        for issue in &insights.issues {
            out.push_str(&format!(
                "- **{}** ({}): {}\n",
                issue.title,
                issue.severity.as_str(),
                issue.description
            ));
        }
    }

    out.push_str("\n### Recommendations\n\n");
    for recommendation in &insights.recommendations {
        out.push_str(&format!("- {recommendation}\n"));
    }
    out
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Escapes characters that would break a table cell.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
