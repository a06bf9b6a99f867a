//! Fixed environment layout for the try-on application
//!
//! Every path, package, and artifact the bootstrap and probe touch is
//! declared here. The compiled-in defaults describe the deployment exactly;
//! a TOML file can override individual fields for unusual hosts.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SetupManifest {
    /// Interpreter candidates, probed in order; the first one on PATH wins.
    pub interpreters: Vec<String>,

    /// Requirements file consulted for the bulk install.
    pub requirements_file: String,

    /// Per-package fallback used when the bulk install fails.
    pub fallback_packages: Vec<String>,

    /// Minimal set installed when no requirements file is present.
    pub essential_packages: Vec<String>,

    /// Working directories provisioned under the root.
    pub directories: Vec<String>,

    /// Model artifacts the pipeline loads at runtime.
    pub model_files: Vec<String>,

    /// SQLite file backing the user table.
    pub store_file: String,

    /// Directory the probe scans for person images.
    pub person_dir: String,

    /// Directory the probe scans for garment images.
    pub garment_dir: String,

    /// Directory the pipeline writes results into.
    pub result_dir: String,

    /// Detection entry point, resolved relative to the root.
    pub detection_script: String,

    /// File extensions the probe accepts as images.
    pub image_extensions: Vec<String>,
}

impl Default for SetupManifest {
    fn default() -> Self {
        Self {
            interpreters: strings(&["python3", "python"]),
            requirements_file: "requirements_ar.txt".to_string(),
            fallback_packages: strings(&[
                "opencv-python",
                "opencv-contrib-python",
                "tensorflow",
                "scikit-learn",
                "matplotlib",
                "flask",
                "Pillow",
                "numpy",
                "PyYAML",
                "scikit-image",
                "imageio",
                "flask-cors",
            ]),
            essential_packages: strings(&[
                "opencv-python",
                "tensorflow",
                "flask",
                "Pillow",
                "numpy",
            ]),
            directories: strings(&[
                "static/result",
                "static/testpicture",
                "static/test_img",
                "static/collections",
                "static/ar_captures",
                "static/3d_captures",
            ]),
            model_files: strings(&[
                "cp_vton_gmm.onnx",
                "cp_vton_tom.onnx",
                "lip_jppnet_384.pb",
                "openpose_pose_coco.prototxt",
                "pose_iter_440000.caffemodel",
            ]),
            store_file: "user_data.db".to_string(),
            person_dir: "static/test_img".to_string(),
            garment_dir: "static/data".to_string(),
            result_dir: "static/result".to_string(),
            detection_script: "detection.py".to_string(),
            image_extensions: strings(&["jpg", "jpeg", "png"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl SetupManifest {
    /// Load overrides from a TOML file; unspecified fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
