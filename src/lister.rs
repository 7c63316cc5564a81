//! Filesystem file lister
//!
//! Walks a project directory and returns its files as root-relative paths,
//! skipping dependency and build directories and capping the result.

use crate::switcher::{FetchError, FetchResult, FileListResult, FileLister};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Default cap on the number of listed files
pub const DEFAULT_MAX_FILES: usize = 10_000;

/// Directory and file names skipped by default
pub const DEFAULT_IGNORED: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    ".next",
    "__pycache__",
    ".DS_Store",
    ".cache",
    ".turbo",
    ".vercel",
    ".output",
    "coverage",
    ".nyc_output",
    ".parcel-cache",
    ".svelte-kit",
    ".nuxt",
    ".expo",
    "vendor",
];

/// Lists project files from the local filesystem
#[derive(Debug, Clone)]
pub struct ProjectFileLister {
    max_files: usize,
    ignored: HashSet<String>,
}

impl Default for ProjectFileLister {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_FILES,
            DEFAULT_IGNORED.iter().map(|name| (*name).to_string()),
        )
    }
}

impl ProjectFileLister {
    /// Create a lister with a file cap and a set of ignored names
    #[must_use]
    pub fn new(max_files: usize, ignored: impl IntoIterator<Item = String>) -> Self {
        Self {
            max_files,
            ignored: ignored.into_iter().collect(),
        }
    }

    /// Maximum number of files returned
    #[must_use]
    pub const fn max_files(&self) -> usize {
        self.max_files
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    fn walk(&self, root: &Path) -> FileListResult {
        let mut files = Vec::new();
        let mut truncated = false;

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(&entry.file_name().to_string_lossy()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if files.len() >= self.max_files {
                truncated = true;
                break;
            }

            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_string_lossy().into_owned());
            }
        }

        files.sort();
        FileListResult { files, truncated }
    }
}

impl FileLister for ProjectFileLister {
    fn list_project_files(&self, root: &str) -> FetchResult<FileListResult> {
        let root_path = Path::new(root);
        if !root_path.is_dir() {
            return Err(FetchError::NotADirectory(root.to_string()));
        }

        let result = self.walk(root_path);
        if result.truncated {
            log::warn!(
                "file list for {root} truncated at {} entries",
                self.max_files
            );
        }
        Ok(result)
    }
}
