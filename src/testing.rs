//! Testing utilities for quickswitch
//!
//! Fake file listers for driving the switcher without a filesystem, and a
//! `ProjectTree` fixture for tests that do walk one.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::switcher::{FetchError, FetchResult, FileListResult, FileLister};

/// Lister that always returns the same files
#[derive(Debug, Clone)]
pub struct StaticLister {
    result: FileListResult,
}

impl StaticLister {
    /// Create a lister returning `files`
    #[must_use]
    pub fn new(files: &[&str], truncated: bool) -> Self {
        Self {
            result: FileListResult::new(files.iter().map(|f| (*f).to_string()).collect(), truncated),
        }
    }
}

impl FileLister for StaticLister {
    fn list_project_files(&self, _root: &str) -> FetchResult<FileListResult> {
        Ok(self.result.clone())
    }
}

/// Lister that always fails with a message
#[derive(Debug, Clone)]
pub struct FailingLister {
    message: String,
}

impl FailingLister {
    /// Create a lister failing with `message`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FileLister for FailingLister {
    fn list_project_files(&self, _root: &str) -> FetchResult<FileListResult> {
        Err(FetchError::Message(self.message.clone()))
    }
}

/// Lister that records the roots it was asked for
#[derive(Debug, Default)]
pub struct RecordingLister {
    roots: Mutex<Vec<String>>,
}

impl RecordingLister {
    /// Roots requested so far
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn roots(&self) -> Vec<String> {
        self.roots.lock().expect("roots lock poisoned").clone()
    }
}

impl FileLister for RecordingLister {
    fn list_project_files(&self, root: &str) -> FetchResult<FileListResult> {
        self.roots
            .lock()
            .expect("roots lock poisoned")
            .push(root.to_string());
        Ok(FileListResult::new(vec![format!("{root}.txt")], false))
    }
}

/// Temporary project directory that is removed on drop
pub struct ProjectTree {
    dir: TempDir,
}

impl ProjectTree {
    /// Create a tree containing the given relative files
    ///
    /// # Panics
    /// Panics if the directory or a file cannot be created.
    #[must_use]
    pub fn with_files(files: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for file in files {
            create_test_file(dir.path().join(file));
        }
        Self { dir }
    }

    /// Root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the tree as a string
    #[must_use]
    pub fn root(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }
}

/// Create a file (and its parent directories) with default content
///
/// # Panics
/// Panics if the file cannot be created.
pub fn create_test_file(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(path, b"test content").expect("Failed to write test file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_tree_creates_nested_files() {
        let tree = ProjectTree::with_files(&["a.txt", "src/lib.rs"]);
        assert!(tree.path().join("a.txt").exists());
        assert!(tree.path().join("src").join("lib.rs").exists());
    }

    #[test]
    fn test_project_tree_cleanup() {
        let path = {
            let tree = ProjectTree::with_files(&["a.txt"]);
            tree.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_recording_lister() {
        let lister = RecordingLister::default();
        let result = lister.list_project_files("/one").unwrap();
        assert_eq!(result.files, vec!["/one.txt"]);
        assert_eq!(lister.roots(), vec!["/one"]);
    }
}
