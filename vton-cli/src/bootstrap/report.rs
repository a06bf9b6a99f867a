//! Setup run reporting
//!
//! Collects each step's outcome and renders the operator transcript. The
//! exit status never carries the result; the transcript does.

use crate::bootstrap::assets::AssetReport;
use crate::bootstrap::installer::InstallReport;
use crate::bootstrap::runtime::RuntimeCheck;
use crate::bootstrap::skeleton::SkeletonResult;
use std::path::PathBuf;

/// Outcome of the store-initialization step.
#[derive(Debug)]
pub struct StoreResult {
    pub path: PathBuf,
    pub error: Option<String>,
}

impl StoreResult {
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// One bootstrap run, step by step. `None` steps were skipped or never reached.
#[derive(Debug)]
pub struct SetupReport {
    pub timestamp: String,
    pub runtime: RuntimeCheck,
    pub install: Option<InstallReport>,
    pub skeleton: Option<SkeletonResult>,
    pub assets: Option<AssetReport>,
    pub store: Option<StoreResult>,
}

impl SetupReport {
    /// Report for a run that stopped at the runtime gate.
    pub fn aborted(timestamp: String, runtime: RuntimeCheck) -> Self {
        Self {
            timestamp,
            runtime,
            install: None,
            skeleton: None,
            assets: None,
            store: None,
        }
    }

    /// The one hard gate: a run succeeds iff the interpreter was usable.
    pub fn succeeded(&self) -> bool {
        self.runtime.compatible
    }
}

pub fn print_runtime(check: &RuntimeCheck) {
    match (&check.version, check.path.is_some()) {
        (Some(version), _) if check.compatible => {
            println!("✓ Python {version} is compatible");
        }
        (Some(version), _) => {
            println!("✗ Python {version} is not compatible");
            println!("Please use Python 3.7 or higher");
        }
        (None, true) => {
            println!("✗ {} found but its version could not be determined", check.program);
            println!("Please use Python 3.7 or higher");
        }
        (None, false) => {
            println!("✗ no Python interpreter found on PATH");
            println!("Please install Python 3.7 or higher");
        }
    }
}

pub fn print_skeleton(result: &SkeletonResult) {
    for path in &result.created {
        println!("✓ Created {}", path.display());
    }
    for path in &result.already_existed {
        println!("✓ {} (already exists)", path.display());
    }
    for (path, error) in &result.errors {
        println!("✗ Failed to create {}: {error}", path.display());
    }
}

pub fn print_assets(report: &AssetReport) {
    for check in &report.checks {
        if check.present {
            println!("✓ {}", check.name);
        } else {
            println!("✗ {} (missing)", check.name);
        }
    }

    let missing = report.missing();
    if !missing.is_empty() {
        println!();
        println!(
            "⚠️  Missing {} model files. The app may not work properly.",
            missing.len()
        );
        println!("Missing: {}", missing.join(", "));
        println!("Please ensure all model files are in the project directory.");
    }
}

pub fn print_store(result: &StoreResult) {
    match &result.error {
        None => println!("✓ Database setup complete"),
        Some(error) => println!("✗ Database setup failed: {error}"),
    }
}

pub fn print_summary(report: &SetupReport) {
    println!();
    println!("{}", "=".repeat(50));

    if !report.succeeded() {
        println!("✗ Setup aborted: no compatible Python runtime");
        println!("Finished at {}", report.timestamp);
        return;
    }

    println!("🎉 Setup complete!");

    if let Some(install) = &report.install {
        if !install.clean() {
            println!("⚠️  Some package installs failed; rerun setup or install them manually.");
        }
    }
    if let Some(skeleton) = &report.skeleton {
        if !skeleton.is_success() {
            println!("⚠️  {} directories could not be created.", skeleton.errors.len());
        }
    }
    if let Some(assets) = &report.assets {
        if !assets.all_present() {
            println!("⚠️  {} model files are missing.", assets.missing().len());
        }
    }
    if let Some(store) = &report.store {
        if !store.ok() {
            println!("⚠️  Database initialization failed.");
        }
    }

    println!();
    println!("To run the application:");
    println!("python app.py");
    println!();
    println!("Then open your browser to: http://127.0.0.1:5000");
    println!();
    println!("📝 Features available:");
    println!("• Traditional Virtual Try-On");
    println!("• AR Try-On with pose detection");
    println!("• 3D Virtual Try-On");
    println!("• Live camera capture");
    println!("• Image upload and processing");
    println!();
    println!("Finished at {}", report.timestamp);
}
