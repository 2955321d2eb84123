//! Composite health scoring.

use crate::domain::{HealthTrend, IssueType, Level, Optimization, Prediction, Report};

/// Extra penalty for each high or critical issue.
pub const HIGH_SEVERITY_PENALTY: i64 = 15;
/// Penalty for every issue regardless of severity.
pub const ISSUE_PENALTY: i64 = 5;

const EXCELLENT_MIN: u8 = 85;
const GOOD_MIN: u8 = 70;
const IMPROVING_MIN: u8 = 50;

const SUMMARY_EXCELLENT: &str =
    "The codebase is in excellent health; only minor improvements are predicted.";
const SUMMARY_GOOD: &str =
    "The codebase is in good health, with a few predicted issues worth scheduling.";
const SUMMARY_AT_RISK: &str =
    "The codebase needs attention; predicted issues are likely to slow development.";

/// Recommendation emitted when any performance issue is predicted.
pub const RECOMMEND_PERFORMANCE: &str = "prioritize performance work";
/// Recommendation emitted when any maintenance issue is predicted.
pub const RECOMMEND_MAINTAINABILITY: &str = "invest in maintainability";
/// Recommendation emitted when a low-effort, high-impact optimization exists.
pub const RECOMMEND_QUICK_WINS: &str = "quick wins available";

/// Compute the 0-100 health score for a set of issues.
pub fn compute_score(issues: &[Prediction]) -> u8 {
    let high = issues
        .iter()
        .filter(|issue| issue.severity.is_high())
        .count() as i64;
    let total = issues.len() as i64;
    let score = 100i64
        .saturating_sub(HIGH_SEVERITY_PENALTY.saturating_mul(high))
        .saturating_sub(ISSUE_PENALTY.saturating_mul(total));

    score.clamp(0, 100) as u8
}

/// Health label for a score. Depends on nothing but the score.
pub fn trend_for(score: u8) -> HealthTrend {
    if score >= EXCELLENT_MIN {
        HealthTrend::Excellent
    } else if score >= GOOD_MIN {
        HealthTrend::Good
    } else if score >= IMPROVING_MIN {
        HealthTrend::Improving
    } else {
        HealthTrend::NeedsAttention
    }
}

/// Prose summary for a score band.
pub fn summary_for(score: u8) -> &'static str {
    if score >= EXCELLENT_MIN {
        SUMMARY_EXCELLENT
    } else if score >= GOOD_MIN {
        SUMMARY_GOOD
    } else {
        SUMMARY_AT_RISK
    }
}

/// Synthesize recommendations. Output order follows the check order.
pub fn recommendations(issues: &[Prediction], optimizations: &[Optimization]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues
        .iter()
        .any(|issue| issue.issue_type == IssueType::Performance)
    {
        recommendations.push(RECOMMEND_PERFORMANCE.to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.issue_type == IssueType::Maintenance)
    {
        recommendations.push(RECOMMEND_MAINTAINABILITY.to_string());
    }
    if optimizations
        .iter()
        .any(|optimization| optimization.effort == Level::Low && optimization.impact == Level::High)
    {
        recommendations.push(RECOMMEND_QUICK_WINS.to_string());
    }

    recommendations
}

/// Compile issues and optimizations into the final report.
pub fn compile_report(issues: Vec<Prediction>, optimizations: Vec<Optimization>) -> Report {
    let score = compute_score(&issues);
    let recommendations = recommendations(&issues, &optimizations);
    Report {
        issues,
        optimizations,
        score,
        trend: trend_for(score),
        summary: summary_for(score).to_string(),
        recommendations,
    }
}
