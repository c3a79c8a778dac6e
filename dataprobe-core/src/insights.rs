//! Plain-language summary of a quality report.
//!
//! A deterministic, offline narrative built only from the report's scores
//! and issues. It is a consumer of [`QualityReport`] and never feeds back
//! into the engine.

use serde::{Deserialize, Serialize};

use crate::quality::{Issue, QualityReport, Severity};

/// Maximum number of issues carried into the narrative.
pub const MAX_INSIGHT_ISSUES: usize = 5;

/// Sub-scores below this produce a recommendation.
const RECOMMENDATION_THRESHOLD: u8 = 80;

const FALLBACK_RECOMMENDATION: &str = "Continue monitoring data quality regularly";

/// One issue rephrased for a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightIssue {
    /// Title-cased issue type, e.g. "Missing Values"
    pub title: String,
    /// The issue message
    pub description: String,
    /// Severity carried over from the report
    pub severity: Severity,
}

impl From<&Issue> for InsightIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            title: issue_title(issue.issue_type.as_str()),
            description: issue.message.clone(),
            severity: issue.severity,
        }
    }
}

/// Narrative summary of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// One-paragraph verdict on the overall score
    pub summary: String,
    /// First few report issues, rephrased
    pub issues: Vec<InsightIssue>,
    /// Suggested next steps, never empty
    pub recommendations: Vec<String>,
    /// Suggested SQL repairs; always empty offline
    #[serde(default)]
    pub sql_fixes: Vec<String>,
}

/// Builds the narrative for a report.
pub fn basic_insights(report: &QualityReport) -> Insights {
    Insights {
        summary: summary(report.overall_score),
        issues: report
            .issues
            .iter()
            .take(MAX_INSIGHT_ISSUES)
            .map(InsightIssue::from)
            .collect(),
        recommendations: recommendations(report),
        sql_fixes: Vec::new(),
    }
}

fn summary(overall_score: u8) -> String {
    let verdict = match overall_score {
        90.. => "The data quality is excellent with minimal issues.",
        70..=89 => "The data quality is good but could be improved.",
        _ => "The data quality needs significant improvement.",
    };
    format!("Your dataset has an overall quality score of {overall_score}/100. {verdict}")
}

fn recommendations(report: &QualityReport) -> Vec<String> {
    let rules = [
        (
            report.completeness,
            "Address missing values to improve completeness score",
        ),
        (
            report.consistency,
            "Standardize data formats and types for better consistency",
        ),
        (
            report.accuracy,
            "Review and correct outliers and duplicate entries",
        ),
        (
            report.validity,
            "Validate data types and formats across all columns",
        ),
    ];

    let mut recommendations: Vec<String> = rules
        .into_iter()
        .filter(|(score, _)| *score < RECOMMENDATION_THRESHOLD)
        .map(|(_, text)| text.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(FALLBACK_RECOMMENDATION.to_string());
    }
    recommendations
}

/// `"missing_values"` becomes `"Missing Values"`.
fn issue_title(issue_type: &str) -> String {
    issue_type
        .replacen('_', " ", 1)
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::IssueType;

    fn report(overall: u8, sub: [u8; 4], issues: Vec<Issue>) -> QualityReport {
        QualityReport {
            overall_score: overall,
            completeness: sub[0],
            consistency: sub[1],
            accuracy: sub[2],
            validity: sub[3],
            issues,
            ..QualityReport::default()
        }
    }

    fn issue(issue_type: IssueType, column: &str) -> Issue {
        Issue::new(
            issue_type,
            Severity::Medium,
            column,
            format!("problem in \"{column}\""),
        )
    }

    #[test]
    fn test_summary_bands() {
        assert!(summary(95).ends_with("excellent with minimal issues."));
        assert!(summary(90).contains("excellent"));
        assert!(summary(89).contains("good but could be improved"));
        assert!(summary(70).contains("good"));
        assert!(summary(69).contains("needs significant improvement"));
        assert_eq!(
            summary(0),
            "Your dataset has an overall quality score of 0/100. \
             The data quality needs significant improvement."
        );
    }

    #[test]
    fn test_issue_titles() {
        assert_eq!(issue_title("missing_values"), "Missing Values");
        assert_eq!(issue_title("low_uniqueness"), "Low Uniqueness");
        assert_eq!(issue_title("outliers"), "Outliers");
    }

    #[test]
    fn test_issues_are_capped() {
        let issues = (0..8).map(|i| issue(IssueType::Outliers, &format!("c{i}"))).collect();
        let insights = basic_insights(&report(50, [50; 4], issues));

        assert_eq!(insights.issues.len(), MAX_INSIGHT_ISSUES);
        assert_eq!(insights.issues[0].title, "Outliers");
        assert_eq!(insights.issues[0].description, "problem in \"c0\"");
        assert_eq!(insights.issues[4].description, "problem in \"c4\"");
    }

    #[test]
    fn test_recommendations_follow_low_scores() {
        let insights = basic_insights(&report(60, [79, 80, 10, 100], Vec::new()));
        assert_eq!(
            insights.recommendations,
            vec![
                "Address missing values to improve completeness score",
                "Review and correct outliers and duplicate entries",
            ]
        );
    }

    #[test]
    fn test_fallback_recommendation() {
        let insights = basic_insights(&report(100, [100; 4], Vec::new()));
        assert_eq!(insights.recommendations, vec![FALLBACK_RECOMMENDATION]);
        assert!(insights.issues.is_empty());
    }

    #[test]
    fn test_empty_report_insights() {
        let insights = basic_insights(&QualityReport::empty());
        assert_eq!(insights.recommendations.len(), 4);
        assert!(insights.summary.contains("0/100"));
    }

    #[test]
    fn test_insights_serialize() {
        let insights = basic_insights(&report(
            75,
            [100; 4],
            vec![issue(IssueType::MissingValues, "email")],
        ));
        let json = serde_json::to_value(&insights).unwrap();
        assert_eq!(json["issues"][0]["title"], "Missing Values");
        assert_eq!(json["issues"][0]["severity"], "medium");
        assert!(json["recommendations"].is_array());
        assert_eq!(json["sqlFixes"], serde_json::json!([]));
    }

    #[test]
    fn test_insights_key_order() {
        let insights = basic_insights(&QualityReport::empty());
        assert!(insights.sql_fixes.is_empty());

        let json = serde_json::to_value(&insights).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["summary", "issues", "recommendations", "sqlFixes"]);
    }
}
