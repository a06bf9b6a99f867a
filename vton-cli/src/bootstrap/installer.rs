//! Dependency installation
//!
//! Installs the Python packages the try-on application imports. A bulk
//! `pip install -r` is preferred; when it fails the installer degrades to
//! per-package attempts, and when no requirements file exists at all it
//! falls back to a minimal essential set. Failures are reported, never fatal.

use crate::manifest::SetupManifest;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// How dependency installation will proceed for a given root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Requirements file present: one bulk install, individual fallback on failure.
    Bulk {
        requirements: PathBuf,
        fallback: Vec<String>,
    },
    /// Requirements file absent: essential packages only.
    Essential { packages: Vec<String> },
}

/// Outcome of one `pip install <package>` attempt.
#[derive(Debug)]
pub struct PackageInstall {
    pub name: String,
    pub ok: bool,
}

/// Accumulated installation outcomes for one run.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Outcome of the bulk requirements install, when one was attempted.
    pub bulk: Option<bool>,
    pub packages: Vec<PackageInstall>,
}

impl InstallReport {
    pub fn failed_packages(&self) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|p| !p.ok)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// True when nothing had to be reported as failed.
    pub fn clean(&self) -> bool {
        self.bulk.unwrap_or(true) && self.failed_packages().is_empty()
    }
}

/// Decide the install strategy from the on-disk layout.
pub fn plan_install(root: &Path, manifest: &SetupManifest) -> InstallPlan {
    let requirements = root.join(&manifest.requirements_file);
    if requirements.exists() {
        InstallPlan::Bulk {
            requirements,
            fallback: manifest.fallback_packages.clone(),
        }
    } else {
        InstallPlan::Essential {
            packages: manifest.essential_packages.clone(),
        }
    }
}

/// Run one pip invocation, echoing a transcript line for it.
fn run_pip(python: &Path, args: &[&str]) -> bool {
    let rendered = format!("{} -m pip {}", python.display(), args.join(" "));
    debug!(command = %rendered, "running pip");

    match Command::new(python).args(["-m", "pip"]).args(args).output() {
        Ok(output) if output.status.success() => {
            println!("✓ {rendered}");
            true
        }
        Ok(output) => {
            println!("✗ {rendered}");
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                println!("Error: {}", stderr.trim());
            }
            false
        }
        Err(err) => {
            println!("✗ {rendered}");
            println!("Error: {err}");
            false
        }
    }
}

/// Install the application's Python dependencies under `root`.
pub fn install_dependencies(python: &Path, root: &Path, manifest: &SetupManifest) -> InstallReport {
    let mut report = InstallReport::default();

    match plan_install(root, manifest) {
        InstallPlan::Bulk { requirements, fallback } => {
            let requirements_arg = requirements.to_string_lossy();
            let bulk_ok = run_pip(python, &["install", "-r", &requirements_arg]);
            report.bulk = Some(bulk_ok);
            if !bulk_ok {
                println!("Failed to install some packages. Trying individual installation...");
                for package in &fallback {
                    report.packages.push(PackageInstall {
                        name: package.clone(),
                        ok: run_pip(python, &["install", package]),
                    });
                }
            }
        }
        InstallPlan::Essential { packages } => {
            println!(
                "{} not found. Installing essential packages...",
                manifest.requirements_file
            );
            for package in &packages {
                report.packages.push(PackageInstall {
                    name: package.clone(),
                    ok: run_pip(python, &["install", package]),
                });
            }
        }
    }

    report
}
