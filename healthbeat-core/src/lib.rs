#![deny(missing_docs)]
//! healthbeat core library.
//!
//! Scans a project's sources, extracts structural signals, predicts likely
//! issues and optimizations, and compiles a composite health report. Also
//! hosts the stub classifier used by the placeholder audit.

pub mod aggregate;
pub mod audit;
pub mod domain;
pub mod error;
pub mod fs;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod score;
pub mod signals;
pub mod source;
pub mod triviality;

pub use aggregate::{SignalCounts, aggregate, complexity_for};
pub use audit::{StubAudit, TrivialFile, audit_paths, audit_stubs};
pub use domain::{
    ComplexityTier, FileSignal, HealthTrend, IssueType, Level, Optimization, OptimizationType,
    Pattern, Prediction, ProjectProfile, Report, Severity, Trend,
};
pub use error::{HealthbeatError, Result};
pub use fs::{FileSystem, ScanConfig, StdFileSystem, candidate_files};
pub use pipeline::{Analyzer, SourceFile, run_predictive_analysis};
pub use report::{render_json, render_report_text, render_stub_audit_text};
pub use rules::{OPTIMIZATION_RULES, PREDICTION_RULES, predict_issues, suggest_optimizations};
pub use score::compile_report;
pub use signals::extract_signals;
pub use source::{PredictionService, PredictionSource, ServicePredictions};
pub use triviality::{TrivialityReason, TrivialityVerdict, classify, classify_triviality};
