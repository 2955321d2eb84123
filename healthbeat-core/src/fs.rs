//! Filesystem abstractions used for scanning.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List all files reachable from the root path.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Default filesystem implementation backed by `std::fs`.
///
/// Hidden files and directories are never listed.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                if is_hidden(&path) {
                    continue;
                }
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Candidate filter applied to enumerated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: normalize(&["js", "jsx", "ts", "tsx"]),
            excluded_dirs: normalize(&["node_modules", "dist", "build", "coverage"]),
        }
    }
}

impl ScanConfig {
    /// Replace the source extensions. A leading dot is ignored.
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = normalize(extensions);
        self
    }

    /// Replace the excluded directory names.
    pub fn with_excluded_dirs<S: AsRef<str>>(mut self, dirs: &[S]) -> Self {
        self.excluded_dirs = normalize(dirs);
        self
    }

    /// Source extensions, lowercased and without dots.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the path is a scan candidate.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
        else {
            return false;
        };
        if !self.extensions.iter().any(|candidate| *candidate == ext) {
            return false;
        }
        !path.components().any(|component| {
            let segment = component.as_os_str().to_string_lossy().to_lowercase();
            self.excluded_dirs.iter().any(|dir| *dir == segment)
        })
    }
}

/// Enumerate candidate files under `root`, sorted for stable output.
pub fn candidate_files<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    config: &ScanConfig,
) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs
        .list_files(root)?
        .into_iter()
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            config.matches(relative)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn normalize<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
