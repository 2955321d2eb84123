//! Report formatting utilities for healthbeat outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::audit::StubAudit;
use crate::domain::Report;

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

/// Render a health report as plain text.
pub fn render_report_text(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Health score: {}/100 ({})", report.score, report.trend);
    let _ = writeln!(output, "{}", report.summary);
    let _ = writeln!(output);

    if report.issues.is_empty() {
        let _ = writeln!(output, "Predicted issues: none");
    } else {
        let _ = writeln!(output, "Predicted issues:");
        for issue in &report.issues {
            let _ = writeln!(
                output,
                "- [{}/{}] {} ({}% confidence)",
                issue.issue_type,
                issue.severity,
                issue.message,
                issue.confidence
            );
            let _ = writeln!(output, "  action: {}", issue.suggested_action);
        }
    }

    if report.optimizations.is_empty() {
        let _ = writeln!(output, "Optimizations: none");
    } else {
        let _ = writeln!(output, "Optimizations:");
        for optimization in &report.optimizations {
            let _ = writeln!(
                output,
                "- [{}] {} (impact {}, effort {})",
                optimization.optimization_type,
                optimization.description,
                optimization.impact,
                optimization.effort
            );
        }
    }

    if !report.recommendations.is_empty() {
        let _ = writeln!(output, "Recommendations:");
        for recommendation in &report.recommendations {
            let _ = writeln!(output, "- {recommendation}");
        }
    }

    output
}

/// Render a stub audit as plain text.
pub fn render_stub_audit_text(audit: &StubAudit) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Scanned: {} files ({} unreadable)",
        audit.scanned, audit.skipped
    );

    if audit.trivial_files.is_empty() {
        let _ = writeln!(output, "Stub files: none");
    } else {
        let _ = writeln!(output, "Stub files:");
        for file in &audit.trivial_files {
            let _ = writeln!(output, "- {} ({})", file.path.display(), file.reason);
        }
    }

    if !audit.hollow_directories.is_empty() {
        let _ = writeln!(output, "Hollow directories:");
        for dir in &audit.hollow_directories {
            let _ = writeln!(output, "- {}", dir.display());
        }
    }

    output
}
