//! Predictive codebase-health pipeline.
//!
//! Signal extraction fans out per file; aggregation waits for every record;
//! the prediction source and score compiler only ever see the aggregate.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::aggregate::aggregate;
use crate::domain::{FileSignal, ProjectProfile, Report};
use crate::error::Result;
use crate::fs::{FileSystem, ScanConfig, candidate_files};
use crate::score::compile_report;
use crate::signals::extract_signals;
use crate::source::{PredictionSource, ServicePredictions, static_predictions};

/// A source file whose contents are already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Full text of the file.
    pub contents: String,
}

/// Runs the pipeline with a fixed prediction source.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    source: PredictionSource,
}

impl Analyzer {
    /// Create an analyzer backed by the given prediction source.
    pub fn new(source: PredictionSource) -> Self {
        Self { source }
    }

    /// The prediction source selected at construction.
    pub fn source(&self) -> &PredictionSource {
        &self.source
    }

    /// Enumerate candidates under `root` and analyze them.
    pub fn scan_project<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        root: &Path,
        config: &ScanConfig,
    ) -> Result<Report> {
        let paths = candidate_files(fs, root, config)?;
        debug!("{} candidate files under {}", paths.len(), root.display());
        self.analyze(fs, &paths)
    }

    /// Read and analyze the given paths. Unreadable files are skipped.
    pub fn analyze<F: FileSystem + ?Sized>(&self, fs: &F, paths: &[PathBuf]) -> Result<Report> {
        let signals = read_signals(fs, paths);
        self.report_for(&profile(&signals))
    }

    /// Analyze files whose contents were loaded by the caller.
    pub fn analyze_sources<I>(&self, sources: I) -> Result<Report>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let signals: Vec<FileSignal> = sources
            .into_iter()
            .map(|source| extract_signals(&source.path, &source.contents))
            .collect();
        self.report_for(&profile(&signals))
    }

    fn report_for(&self, profile: &ProjectProfile) -> Result<Report> {
        let ServicePredictions {
            issues,
            optimizations,
        } = self.source.predict(profile)?;
        let report = compile_report(issues, optimizations);
        info!(
            "analyzed {} files via {}: score {} ({})",
            profile.file_count,
            self.source.name(),
            report.score,
            report.trend
        );
        Ok(report)
    }
}

/// Aggregate extracted signals, counting only files that were read.
pub fn profile(signals: &[FileSignal]) -> ProjectProfile {
    aggregate(signals, signals.len())
}

/// Run the pipeline over `paths` with the built-in rule tables.
pub fn run_predictive_analysis<F: FileSystem + ?Sized>(fs: &F, paths: &[PathBuf]) -> Report {
    let signals = read_signals(fs, paths);
    let ServicePredictions {
        issues,
        optimizations,
    } = static_predictions(&profile(&signals));
    compile_report(issues, optimizations)
}

fn read_signals<F: FileSystem + ?Sized>(fs: &F, paths: &[PathBuf]) -> Vec<FileSignal> {
    paths
        .iter()
        .filter_map(|path| match fs.read_to_string(path) {
            Ok(contents) => Some(extract_signals(path, &contents)),
            Err(err) => {
                debug!("skipping unreadable file {}: {err}", path.display());
                None
            }
        })
        .collect()
}
