//! Domain entities for healthbeat.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Structural signals extracted from a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSignal {
    /// Path of the file the signals were extracted from.
    pub path: PathBuf,
    /// The file returns markup from a function (component idiom).
    pub is_component_like: bool,
    /// The file calls state or effect hooks.
    pub uses_state_hooks: bool,
    /// The file extension denotes a statically typed language.
    pub is_typed_source: bool,
    /// The file styles markup with utility class names.
    pub uses_utility_styling: bool,
    /// The path marks the file as a test or spec.
    pub is_test_file: bool,
}

/// A project-wide pattern derived from aggregated signals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// More than a handful of files follow the functional component idiom.
    FunctionalComponents,
    /// Most files are written in a statically typed language.
    StrongTypedSource,
    /// Components are commonly styled with utility classes.
    UtilityStyling,
    /// Hook-based state management dominates.
    ModernStateManagement,
    /// The project already applies performance optimizations.
    ///
    /// The aggregator never derives this pattern; rules treat it as absent
    /// unless a profile is built with it explicitly.
    PerformanceOptimization,
}

impl Pattern {
    /// Human-readable label for the pattern.
    pub fn label(self) -> &'static str {
        match self {
            Self::FunctionalComponents => "functional-component idiom",
            Self::StrongTypedSource => "strong typed-source adoption",
            Self::UtilityStyling => "utility-styling adoption",
            Self::ModernStateManagement => "modern state-management idiom",
            Self::PerformanceOptimization => "performance optimization",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directional statement about the project derived from aggregated signals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    /// Hook usage outpaces components by a wide margin.
    IncreasingModularity,
    /// Nearly every file is statically typed.
    ExcellentTypedSource,
    /// Few test files relative to the file count.
    LowTestCoverage,
}

impl Trend {
    /// Human-readable label for the trend.
    pub fn label(self) -> &'static str {
        match self {
            Self::IncreasingModularity => "increasing modularity",
            Self::ExcellentTypedSource => "excellent typed-source adoption",
            Self::LowTestCoverage => "low test coverage",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Project size tier derived from the scanned file count.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Twenty files or fewer.
    #[default]
    Low,
    /// Up to fifty files.
    Medium,
    /// More than fifty files.
    High,
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Aggregate snapshot of a scanned project.
///
/// This is the only input handed to prediction sources, so every prediction
/// and optimization is independent of file visitation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    /// Number of files that contributed signals.
    pub file_count: usize,
    /// Patterns present in the project.
    pub patterns: BTreeSet<Pattern>,
    /// Trend statements in derivation order.
    pub trends: Vec<Trend>,
    /// Complexity tier for the file count.
    pub complexity: ComplexityTier,
}

impl ProjectProfile {
    /// Returns true when the pattern is present.
    pub fn has_pattern(&self, pattern: Pattern) -> bool {
        self.patterns.contains(&pattern)
    }

    /// Returns true when the trend was derived.
    pub fn has_trend(&self, trend: Trend) -> bool {
        self.trends.contains(&trend)
    }
}

/// Category of a predicted issue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// Runtime or load-time performance.
    Performance,
    /// Long-term maintainability.
    Maintenance,
    /// Ability to grow with the project.
    Scalability,
    /// Security posture.
    Security,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Performance => "performance",
            Self::Maintenance => "maintenance",
            Self::Scalability => "scalability",
            Self::Security => "security",
        })
    }
}

/// Severity of a predicted issue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor concern.
    Low,
    /// Worth scheduling.
    Medium,
    /// Should be addressed soon.
    High,
    /// Needs immediate attention.
    Critical,
}

impl Severity {
    /// High and critical issues weigh extra in the health score.
    pub fn is_high(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        })
    }
}

/// A forecast of a potential codebase problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Issue category.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Short headline.
    pub message: String,
    /// Longer explanation.
    pub description: String,
    /// Issue severity.
    pub severity: Severity,
    /// Confidence in the prediction, 0-100.
    pub confidence: u8,
    /// Recommended next step.
    pub suggested_action: String,
}

/// Category of a suggested optimization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    /// Rendering or computation speed.
    Performance,
    /// Structural decomposition.
    Architecture,
    /// Shipped bundle size.
    Bundle,
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Performance => "performance",
            Self::Architecture => "architecture",
            Self::Bundle => "bundle",
        })
    }
}

/// Relative size of an optimization's impact or effort.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Small.
    Low,
    /// Moderate.
    Medium,
    /// Large.
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A suggestion for improving the codebase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    /// Optimization category.
    #[serde(rename = "type")]
    pub optimization_type: OptimizationType,
    /// What to do.
    pub description: String,
    /// Expected benefit.
    pub impact: Level,
    /// Expected cost.
    pub effort: Level,
}

/// Health label derived from the score alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTrend {
    /// Score of 85 or more.
    #[serde(rename = "excellent")]
    Excellent,
    /// Score of 70 or more.
    #[serde(rename = "good")]
    Good,
    /// Score of 50 or more.
    #[serde(rename = "improving")]
    Improving,
    /// Anything lower.
    #[serde(rename = "needs attention")]
    NeedsAttention,
}

impl HealthTrend {
    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Improving => "improving",
            Self::NeedsAttention => "needs attention",
        }
    }
}

impl fmt::Display for HealthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite health report produced once per scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Predicted issues in rule order.
    pub issues: Vec<Prediction>,
    /// Suggested optimizations in rule order.
    pub optimizations: Vec<Optimization>,
    /// Aggregate health score, 0-100.
    pub score: u8,
    /// Label derived from the score.
    pub trend: HealthTrend,
    /// Prose summary for the score band.
    pub summary: String,
    /// Synthesized recommendations.
    pub recommendations: Vec<String>,
}
