//! Working-directory skeleton
//!
//! Provisions the static/ layout the application serves captures and results
//! from. Creation is idempotent; failures are recorded per directory.

use std::fs;
use std::path::{Path, PathBuf};

/// Result of one provisioning pass.
#[derive(Debug, Default)]
pub struct SkeletonResult {
    pub created: Vec<PathBuf>,
    pub already_existed: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, String)>,
}

impl SkeletonResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.created.len() + self.already_existed.len() + self.errors.len()
    }
}

/// Create a single directory, distinguishing "newly created" from "was there".
fn create_directory(path: &Path) -> Result<bool, String> {
    if path.exists() {
        if path.is_dir() {
            Ok(false)
        } else {
            Err(format!("path exists but is not a directory: {}", path.display()))
        }
    } else {
        match fs::create_dir_all(path) {
            Ok(()) => Ok(true),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// Provision every directory in `directories`, resolved relative to `root`.
pub fn create_skeleton(root: &Path, directories: &[String]) -> SkeletonResult {
    let mut result = SkeletonResult::default();

    for dir in directories {
        let path = root.join(dir);
        match create_directory(&path) {
            Ok(true) => result.created.push(path),
            Ok(false) => result.already_existed.push(path),
            Err(err) => result.errors.push((path, err)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<String> {
        crate::manifest::SetupManifest::default().directories
    }

    #[test]
    fn second_pass_reports_existing_and_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = layout();

        let first = create_skeleton(dir.path(), &dirs);
        assert!(first.is_success());
        assert_eq!(first.created.len(), dirs.len());
        assert!(first.already_existed.is_empty());

        let second = create_skeleton(dir.path(), &dirs);
        assert!(second.is_success());
        assert!(second.created.is_empty());
        assert_eq!(second.already_existed.len(), dirs.len());
        assert_eq!(second.total_count(), dirs.len());
    }

    #[test]
    fn file_in_the_way_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("static"), b"occupied").unwrap();

        let result = create_skeleton(dir.path(), &["static/result".to_string()]);
        assert!(!result.is_success());
        assert_eq!(result.errors.len(), 1);
        assert!(result.created.is_empty());
    }

    #[test]
    fn mixed_outcomes_are_tracked_independently() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("static/result")).unwrap();

        let result = create_skeleton(
            dir.path(),
            &["static/result".to_string(), "static/test_img".to_string()],
        );
        assert!(result.is_success());
        assert_eq!(result.created.len(), 1);
        assert_eq!(result.already_existed.len(), 1);
    }
}
