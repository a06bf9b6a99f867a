//! Model artifact verification
//!
//! The try-on pipeline loads its networks from files shipped out of band;
//! setup only verifies presence and warns about gaps, it never downloads.

use std::path::Path;

#[derive(Debug)]
pub struct ArtifactCheck {
    pub name: String,
    pub present: bool,
}

#[derive(Debug, Default)]
pub struct AssetReport {
    pub checks: Vec<ArtifactCheck>,
}

impl AssetReport {
    pub fn missing(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn all_present(&self) -> bool {
        self.checks.iter().all(|c| c.present)
    }
}

/// Partition the required model files into present and missing under `root`.
pub fn check_assets(root: &Path, model_files: &[String]) -> AssetReport {
    AssetReport {
        checks: model_files
            .iter()
            .map(|name| ArtifactCheck {
                name: name.clone(),
                present: root.join(name).exists(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_every_subset_of_present_files() {
        let model_files = crate::manifest::SetupManifest::default().model_files;
        assert_eq!(model_files.len(), 5);

        for mask in 0u32..32 {
            let dir = tempfile::tempdir().unwrap();
            let mut expected_missing: Vec<&str> = Vec::new();
            for (i, name) in model_files.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    std::fs::write(dir.path().join(name), b"model bytes").unwrap();
                } else {
                    expected_missing.push(name.as_str());
                }
            }

            let report = check_assets(dir.path(), &model_files);
            assert_eq!(report.missing(), expected_missing, "mask {mask:#07b}");
            assert_eq!(report.all_present(), expected_missing.is_empty());
        }
    }

    #[test]
    fn empty_artifact_list_is_trivially_complete() {
        let dir = tempfile::tempdir().unwrap();
        let report = check_assets(dir.path(), &[]);
        assert!(report.all_present());
        assert!(report.missing().is_empty());
    }
}
