//! Runtime gate for the try-on environment
//!
//! Resolves the Python interpreter the application stack runs on and checks
//! its version before any other setup step is allowed to touch the host.

use crate::manifest::SetupManifest;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

// The application stack targets the CPython 3 series only.
const SUPPORTED_MAJOR: u32 = 3;
const MINIMUM_MINOR: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    pub fn is_supported(self) -> bool {
        self.major == SUPPORTED_MAJOR && self.minor >= MINIMUM_MINOR
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Result of the interpreter check for one bootstrap run.
#[derive(Debug)]
pub struct RuntimeCheck {
    /// Candidate name that resolved, or the first candidate when none did.
    pub program: String,
    pub path: Option<PathBuf>,
    pub version: Option<PythonVersion>,
    pub compatible: bool,
}

impl RuntimeCheck {
    /// Interpreter to hand to later steps; `Some` only when the gate passed.
    pub fn resolved(&self) -> Option<&Path> {
        if self.compatible {
            self.path.as_deref()
        } else {
            None
        }
    }
}

/// Check if a binary exists in PATH
fn find_binary(name: &str) -> Option<PathBuf> {
    Command::new("which").arg(name).output().ok().and_then(|output| {
        if output.status.success() {
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| PathBuf::from(s.trim()))
        } else {
            None
        }
    })
}

/// First candidate resolvable on PATH; shared by setup and the probe.
pub fn find_interpreter(candidates: &[String]) -> Option<PathBuf> {
    candidates.iter().find_map(|name| find_binary(name))
}

/// Version reported by `<interpreter> --version`.
fn interpreter_version(program: &Path) -> Option<PythonVersion> {
    let output = Command::new(program).arg("--version").output().ok()?;
    // CPython 3.4+ prints the version to stdout, older releases to stderr
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_version(&stdout).or_else(|| {
        let stderr = String::from_utf8_lossy(&output.stderr);
        extract_version(&stderr)
    })
}

/// Extract `X.Y.Z` from interpreter output such as "Python 3.10.12".
fn extract_version(output: &str) -> Option<PythonVersion> {
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").ok()?;
    let cap = re.captures(output)?;
    Some(PythonVersion {
        major: cap.get(1)?.as_str().parse().ok()?,
        minor: cap.get(2)?.as_str().parse().ok()?,
        micro: cap.get(3)?.as_str().parse().ok()?,
    })
}

/// Resolve the interpreter and gate on its version.
pub fn check_runtime(manifest: &SetupManifest) -> RuntimeCheck {
    for name in &manifest.interpreters {
        if let Some(path) = find_binary(name) {
            debug!(interpreter = %path.display(), "resolved python interpreter");
            let version = interpreter_version(&path);
            let compatible = version.is_some_and(PythonVersion::is_supported);
            return RuntimeCheck {
                program: name.clone(),
                path: Some(path),
                version,
                compatible,
            };
        }
    }

    RuntimeCheck {
        program: manifest
            .interpreters
            .first()
            .cloned()
            .unwrap_or_else(|| "python3".to_string()),
        path: None,
        version: None,
        compatible: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_version_from_interpreter_output() {
        assert_eq!(
            extract_version("Python 3.10.12"),
            Some(PythonVersion { major: 3, minor: 10, micro: 12 })
        );
        assert_eq!(
            extract_version("Python 2.7.18"),
            Some(PythonVersion { major: 2, minor: 7, micro: 18 })
        );
        assert_eq!(extract_version("no digits here"), None);
    }

    #[test]
    fn gate_requires_three_seven_or_newer() {
        let v = |major, minor| PythonVersion { major, minor, micro: 0 };
        assert!(v(3, 7).is_supported());
        assert!(v(3, 12).is_supported());
        assert!(!v(3, 6).is_supported());
        assert!(!v(2, 7).is_supported());
        // pinned to the 3.x series, a hypothetical 4.0 does not pass
        assert!(!v(4, 0).is_supported());
    }

    #[test]
    fn unresolvable_interpreter_fails_the_gate() {
        let manifest = SetupManifest {
            interpreters: vec!["vton-test-no-such-interpreter".to_string()],
            ..SetupManifest::default()
        };
        let check = check_runtime(&manifest);
        assert!(!check.compatible);
        assert!(check.path.is_none());
        assert!(check.resolved().is_none());
        assert_eq!(check.program, "vton-test-no-such-interpreter");
    }
}
