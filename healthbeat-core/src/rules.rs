//! Rule tables that turn a project profile into predictions and optimizations.
//!
//! Rules are plain data evaluated in declaration order. Every rule is
//! independent: none suppresses another, and any number may fire. Adding a
//! rule means appending a table entry.

use crate::domain::{
    ComplexityTier, IssueType, Level, Optimization, OptimizationType, Pattern, Prediction,
    ProjectProfile, Severity, Trend,
};

/// A condition over a project profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The pattern is present.
    PatternPresent(Pattern),
    /// The pattern is absent.
    PatternAbsent(Pattern),
    /// The trend was derived.
    TrendPresent(Trend),
    /// The project has exactly this complexity tier.
    Complexity(ComplexityTier),
    /// Every nested condition holds.
    All(&'static [Condition]),
}

impl Condition {
    /// Evaluate the condition against a profile.
    pub fn holds(&self, profile: &ProjectProfile) -> bool {
        match self {
            Self::PatternPresent(pattern) => profile.has_pattern(*pattern),
            Self::PatternAbsent(pattern) => !profile.has_pattern(*pattern),
            Self::TrendPresent(trend) => profile.has_trend(*trend),
            Self::Complexity(tier) => profile.complexity == *tier,
            Self::All(conditions) => conditions.iter().all(|condition| condition.holds(profile)),
        }
    }
}

/// A condition paired with the issue it predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionRule {
    /// Stable rule identifier.
    pub id: &'static str,
    /// When the rule fires.
    pub when: Condition,
    /// Issue category.
    pub issue_type: IssueType,
    /// Issue severity.
    pub severity: Severity,
    /// Confidence, 0-100.
    pub confidence: u8,
    /// Headline.
    pub message: &'static str,
    /// Explanation.
    pub description: &'static str,
    /// Recommended next step.
    pub suggested_action: &'static str,
}

impl PredictionRule {
    /// The predicted issue, when the rule fires for the profile.
    pub fn evaluate(&self, profile: &ProjectProfile) -> Option<Prediction> {
        self.when.holds(profile).then(|| Prediction {
            issue_type: self.issue_type,
            message: self.message.to_string(),
            description: self.description.to_string(),
            severity: self.severity,
            confidence: self.confidence,
            suggested_action: self.suggested_action.to_string(),
        })
    }
}

/// A condition paired with the optimization it suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizationRule {
    /// Stable rule identifier.
    pub id: &'static str,
    /// When the rule fires.
    pub when: Condition,
    /// Optimization category.
    pub optimization_type: OptimizationType,
    /// What to do.
    pub description: &'static str,
    /// Expected benefit.
    pub impact: Level,
    /// Expected cost.
    pub effort: Level,
}

impl OptimizationRule {
    /// The suggested optimization, when the rule fires for the profile.
    pub fn evaluate(&self, profile: &ProjectProfile) -> Option<Optimization> {
        self.when.holds(profile).then(|| Optimization {
            optimization_type: self.optimization_type,
            description: self.description.to_string(),
            impact: self.impact,
            effort: self.effort,
        })
    }
}

/// Issue prediction rules, in evaluation order.
pub const PREDICTION_RULES: &[PredictionRule] = &[
    PredictionRule {
        id: "bundle-growth",
        when: Condition::All(&[
            Condition::Complexity(ComplexityTier::High),
            Condition::PatternAbsent(Pattern::PerformanceOptimization),
        ]),
        issue_type: IssueType::Performance,
        severity: Severity::Medium,
        confidence: 85,
        message: "Bundle size and load time are likely to degrade",
        description: "A large codebase without performance optimizations tends to ship oversized bundles and slow initial loads.",
        suggested_action: "introduce code splitting and lazy loading",
    },
    PredictionRule {
        id: "untyped-components",
        when: Condition::All(&[
            Condition::PatternPresent(Pattern::FunctionalComponents),
            Condition::PatternAbsent(Pattern::StrongTypedSource),
        ]),
        issue_type: IssueType::Maintenance,
        severity: Severity::Low,
        confidence: 70,
        message: "Component contracts are not enforced by types",
        description: "Many components are written without static types, so prop and state mismatches surface only at runtime.",
        suggested_action: "consider migrating toward a typed source language",
    },
    PredictionRule {
        id: "low-test-coverage",
        when: Condition::TrendPresent(Trend::LowTestCoverage),
        issue_type: IssueType::Maintenance,
        severity: Severity::High,
        confidence: 90,
        message: "Regressions are likely to go unnoticed",
        description: "Test files make up a small share of the codebase, leaving most behavior unverified.",
        suggested_action: "adopt a comprehensive testing strategy",
    },
    PredictionRule {
        id: "audit-surface",
        when: Condition::Complexity(ComplexityTier::High),
        issue_type: IssueType::Security,
        severity: Severity::Medium,
        confidence: 75,
        message: "Security exposure grows with the codebase",
        description: "Large projects accumulate dependencies and entry points that drift out of date without regular review.",
        suggested_action: "schedule recurring security audits and dependency updates",
    },
];

/// Optimization rules, in evaluation order.
pub const OPTIMIZATION_RULES: &[OptimizationRule] = &[
    OptimizationRule {
        id: "memoize-components",
        when: Condition::PatternPresent(Pattern::FunctionalComponents),
        optimization_type: OptimizationType::Performance,
        description: "memoize frequently re-rendering components",
        impact: Level::Medium,
        effort: Level::Low,
    },
    OptimizationRule {
        id: "memoize-computations",
        when: Condition::PatternPresent(Pattern::ModernStateManagement),
        optimization_type: OptimizationType::Performance,
        description: "memoize expensive computations/callbacks",
        impact: Level::High,
        effort: Level::Medium,
    },
    OptimizationRule {
        id: "modular-decomposition",
        when: Condition::Complexity(ComplexityTier::High),
        optimization_type: OptimizationType::Architecture,
        description: "evaluate modular/federated decomposition",
        impact: Level::High,
        effort: Level::High,
    },
    OptimizationRule {
        id: "purge-utilities",
        when: Condition::PatternPresent(Pattern::UtilityStyling),
        optimization_type: OptimizationType::Bundle,
        description: "enable production purge of unused utility classes",
        impact: Level::Medium,
        effort: Level::Low,
    },
];

/// Predict issues for a profile using [`PREDICTION_RULES`].
pub fn predict_issues(profile: &ProjectProfile) -> Vec<Prediction> {
    evaluate_predictions(PREDICTION_RULES, profile)
}

/// Suggest optimizations for a profile using [`OPTIMIZATION_RULES`].
pub fn suggest_optimizations(profile: &ProjectProfile) -> Vec<Optimization> {
    evaluate_optimizations(OPTIMIZATION_RULES, profile)
}

/// Evaluate an arbitrary prediction rule table, preserving table order.
pub fn evaluate_predictions(rules: &[PredictionRule], profile: &ProjectProfile) -> Vec<Prediction> {
    rules.iter().filter_map(|rule| rule.evaluate(profile)).collect()
}

/// Evaluate an arbitrary optimization rule table, preserving table order.
pub fn evaluate_optimizations(
    rules: &[OptimizationRule],
    profile: &ProjectProfile,
) -> Vec<Optimization> {
    rules.iter().filter_map(|rule| rule.evaluate(profile)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile(patterns: &[Pattern], trends: &[Trend], complexity: ComplexityTier) -> ProjectProfile {
        ProjectProfile {
            file_count: 0,
            patterns: patterns.iter().copied().collect(),
            trends: trends.to_vec(),
            complexity,
        }
    }

    fn rule(id: &str) -> &'static PredictionRule {
        PREDICTION_RULES
            .iter()
            .find(|rule| rule.id == id)
            .expect("rule exists")
    }

    fn optimization_rule(id: &str) -> &'static OptimizationRule {
        OPTIMIZATION_RULES
            .iter()
            .find(|rule| rule.id == id)
            .expect("rule exists")
    }

    #[test]
    fn rule_ids_are_unique() {
        let predictions: HashSet<_> = PREDICTION_RULES.iter().map(|rule| rule.id).collect();
        let optimizations: HashSet<_> = OPTIMIZATION_RULES.iter().map(|rule| rule.id).collect();
        assert_eq!(predictions.len(), PREDICTION_RULES.len());
        assert_eq!(optimizations.len(), OPTIMIZATION_RULES.len());
    }

    #[test]
    fn confidences_stay_in_range() {
        assert!(PREDICTION_RULES.iter().all(|rule| rule.confidence <= 100));
    }

    #[test]
    fn bundle_growth_needs_high_complexity_without_optimizations() {
        let rule = rule("bundle-growth");
        assert!(rule.evaluate(&profile(&[], &[], ComplexityTier::High)).is_some());
        assert!(rule.evaluate(&profile(&[], &[], ComplexityTier::Medium)).is_none());
        let optimized = profile(
            &[Pattern::PerformanceOptimization],
            &[],
            ComplexityTier::High,
        );
        assert!(rule.evaluate(&optimized).is_none());

        let issue = rule
            .evaluate(&profile(&[], &[], ComplexityTier::High))
            .expect("fires");
        assert_eq!(issue.issue_type, IssueType::Performance);
        assert_eq!(issue.severity, Severity::Medium);
        assert_eq!(issue.confidence, 85);
        assert_eq!(issue.suggested_action, "introduce code splitting and lazy loading");
    }

    #[test]
    fn untyped_components_rule() {
        let rule = rule("untyped-components");
        let untyped = profile(&[Pattern::FunctionalComponents], &[], ComplexityTier::Low);
        let typed = profile(
            &[Pattern::FunctionalComponents, Pattern::StrongTypedSource],
            &[],
            ComplexityTier::Low,
        );
        let issue = rule.evaluate(&untyped).expect("fires");
        assert_eq!(issue.issue_type, IssueType::Maintenance);
        assert_eq!(issue.severity, Severity::Low);
        assert_eq!(issue.confidence, 70);
        assert!(rule.evaluate(&typed).is_none());
    }

    #[test]
    fn low_test_coverage_rule() {
        let rule = rule("low-test-coverage");
        let issue = rule
            .evaluate(&profile(&[], &[Trend::LowTestCoverage], ComplexityTier::Low))
            .expect("fires");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.confidence, 90);
        assert_eq!(issue.suggested_action, "adopt a comprehensive testing strategy");
        assert!(rule.evaluate(&profile(&[], &[], ComplexityTier::Low)).is_none());
    }

    #[test]
    fn audit_surface_rule() {
        let rule = rule("audit-surface");
        let issue = rule
            .evaluate(&profile(&[], &[], ComplexityTier::High))
            .expect("fires");
        assert_eq!(issue.issue_type, IssueType::Security);
        assert_eq!(issue.confidence, 75);
        assert!(rule.evaluate(&profile(&[], &[], ComplexityTier::Low)).is_none());
    }

    #[test]
    fn predictions_keep_declaration_order() {
        let issues = predict_issues(&profile(
            &[Pattern::FunctionalComponents],
            &[Trend::LowTestCoverage],
            ComplexityTier::High,
        ));
        let types: Vec<_> = issues.iter().map(|issue| issue.issue_type).collect();
        assert_eq!(
            types,
            vec![
                IssueType::Performance,
                IssueType::Maintenance,
                IssueType::Maintenance,
                IssueType::Security,
            ]
        );
        assert_eq!(issues[1].severity, Severity::Low);
        assert_eq!(issues[2].severity, Severity::High);
    }

    #[test]
    fn empty_profile_predicts_nothing() {
        let empty = ProjectProfile::default();
        assert!(predict_issues(&empty).is_empty());
        assert!(suggest_optimizations(&empty).is_empty());
    }

    #[test]
    fn optimization_rules_map_patterns() {
        let memo = optimization_rule("memoize-components")
            .evaluate(&profile(&[Pattern::FunctionalComponents], &[], ComplexityTier::Low))
            .expect("fires");
        assert_eq!(memo.optimization_type, OptimizationType::Performance);
        assert_eq!((memo.impact, memo.effort), (Level::Medium, Level::Low));

        let callbacks = optimization_rule("memoize-computations")
            .evaluate(&profile(&[Pattern::ModernStateManagement], &[], ComplexityTier::Low))
            .expect("fires");
        assert_eq!((callbacks.impact, callbacks.effort), (Level::High, Level::Medium));

        let purge = optimization_rule("purge-utilities")
            .evaluate(&profile(&[Pattern::UtilityStyling], &[], ComplexityTier::Low))
            .expect("fires");
        assert_eq!(purge.optimization_type, OptimizationType::Bundle);
    }

    #[test]
    fn optimizations_keep_declaration_order() {
        let optimizations = suggest_optimizations(&profile(
            &[
                Pattern::UtilityStyling,
                Pattern::ModernStateManagement,
                Pattern::FunctionalComponents,
            ],
            &[],
            ComplexityTier::High,
        ));
        let descriptions: Vec<_> = optimizations
            .iter()
            .map(|optimization| optimization.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "memoize frequently re-rendering components",
                "memoize expensive computations/callbacks",
                "evaluate modular/federated decomposition",
                "enable production purge of unused utility classes",
            ]
        );
    }

    #[test]
    fn custom_tables_are_evaluated_in_order() {
        const RULES: &[PredictionRule] = &[PredictionRule {
            id: "medium-scalability",
            when: Condition::Complexity(ComplexityTier::Medium),
            issue_type: IssueType::Scalability,
            severity: Severity::Critical,
            confidence: 60,
            message: "m",
            description: "d",
            suggested_action: "a",
        }];
        let issues = evaluate_predictions(RULES, &profile(&[], &[], ComplexityTier::Medium));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::Scalability);
    }
}
