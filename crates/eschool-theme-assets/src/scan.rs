//! Resolve content patterns against a project directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use eschool_theme_config::compile_pattern;
use globset::{GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

/// Errors that can occur when scanning content.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Project root not found: {0}")]
    RootNotFound(String),

    #[error("Invalid content pattern: {0}")]
    InvalidPattern(#[from] globset::Error),
}

/// Finds the project files selected by a set of content patterns.
#[derive(Debug)]
pub struct ContentScanner {
    root: PathBuf,
    patterns: Vec<String>,
    glob_set: GlobSet,
}

impl ContentScanner {
    /// Compile `patterns` for scanning under `root`.
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_pattern(pattern)?);
        }

        Ok(Self {
            root: root.into(),
            patterns: patterns.to_vec(),
            glob_set: builder.build()?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check a root-relative path against every pattern.
    pub fn matches(&self, relative: &str) -> bool {
        self.glob_set.is_match(relative)
    }

    /// Walk the root and collect matching files.
    ///
    /// Returns root-relative paths with `/` separators, sorted and without
    /// duplicates, however many patterns select a file.
    pub fn scan(&self) -> Result<BTreeSet<String>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::RootNotFound(self.root.display().to_string()));
        }

        let mut files = BTreeSet::new();
        let mut hits = vec![0usize; self.patterns.len()];

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative) = relative_path(&self.root, entry.path()) else {
                continue;
            };

            let matched = self.glob_set.matches(&relative);
            if matched.is_empty() {
                continue;
            }
            for i in matched {
                hits[i] += 1;
            }
            files.insert(relative);
        }

        for (pattern, count) in self.patterns.iter().zip(&hits) {
            if *count == 0 {
                tracing::warn!("Content pattern {} matched no files", pattern);
            } else {
                tracing::debug!("Content pattern {} matched {} files", pattern, count);
            }
        }

        Ok(files)
    }
}

/// Root-relative path joined with `/`, or `None` for non-UTF-8 names.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
