//! Stub audit: finds placeholder files and directories holding nothing else.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::{FileSystem, ScanConfig, candidate_files};
use crate::triviality::classify;

/// A file classified as a stub or placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrivialFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Diagnostic reason for the verdict.
    pub reason: String,
}

/// Outcome of a stub audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubAudit {
    /// Files that were read and classified.
    pub scanned: usize,
    /// Files that could not be read.
    pub skipped: usize,
    /// Trivial files in path order.
    pub trivial_files: Vec<TrivialFile>,
    /// Directories whose candidate files are all trivial.
    pub hollow_directories: Vec<PathBuf>,
}

/// Classify every candidate file under `root`.
pub fn audit_stubs<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    config: &ScanConfig,
) -> Result<StubAudit> {
    let paths = candidate_files(fs, root, config)?;
    Ok(audit_paths(fs, &paths))
}

/// Classify the given paths. Unreadable files are counted as skipped.
pub fn audit_paths<F: FileSystem + ?Sized>(fs: &F, paths: &[PathBuf]) -> StubAudit {
    let mut audit = StubAudit::default();
    // directory -> (candidates, trivial)
    let mut directories: BTreeMap<PathBuf, (usize, usize)> = BTreeMap::new();

    for path in paths {
        let contents = match fs.read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("skipping unreadable file {}: {err}", path.display());
                audit.skipped += 1;
                continue;
            }
        };
        audit.scanned += 1;

        let verdict = classify(&contents);
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let tally = directories.entry(dir).or_insert((0, 0));
        tally.0 += 1;

        if verdict.trivial {
            tally.1 += 1;
            audit.trivial_files.push(TrivialFile {
                path: path.clone(),
                reason: verdict
                    .reason
                    .map(|reason| reason.to_string())
                    .unwrap_or_default(),
            });
        }
    }

    audit.trivial_files.sort_by(|a, b| a.path.cmp(&b.path));
    audit.hollow_directories = directories
        .into_iter()
        .filter(|(_, (candidates, trivial))| *candidates > 0 && candidates == trivial)
        .map(|(dir, _)| dir)
        .collect();

    audit
}
