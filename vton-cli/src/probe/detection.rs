//! Bounded invocation of the external detection entry point.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// A fully resolved detection invocation: program plus argument vector.
/// Built as an argv, never a shell string, so image paths need no quoting.
#[derive(Debug, Clone)]
pub struct DetectionCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl DetectionCommand {
    pub fn new(python: &Path, script: &str, person: &Path, cloth: &Path) -> Self {
        Self {
            program: python.to_path_buf(),
            args: vec![
                script.to_string(),
                "--input_image".to_string(),
                person.display().to_string(),
                "--input_cloth".to_string(),
                cloth.display().to_string(),
            ],
        }
    }

    /// Shell-style rendering for the transcript only.
    pub fn rendered(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// What happened to one bounded detection run.
#[derive(Debug)]
pub enum DetectionOutcome {
    Completed {
        status: std::process::ExitStatus,
        stdout: String,
        stderr: String,
    },
    TimedOut {
        limit: Duration,
    },
    Failed {
        error: String,
    },
}

/// Run the detection command from `root`, waiting at most `limit`.
pub async fn run_detection(
    command: &DetectionCommand,
    root: &Path,
    limit: Duration,
) -> DetectionOutcome {
    debug!(command = %command.rendered(), limit_secs = limit.as_secs(), "spawning detection");

    let mut child = Command::new(&command.program);
    child
        .args(&command.args)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let spawned = match child.spawn() {
        Ok(spawned) => spawned,
        Err(err) => return DetectionOutcome::Failed { error: err.to_string() },
    };

    match timeout(limit, spawned.wait_with_output()).await {
        Ok(Ok(output)) => DetectionOutcome::Completed {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Ok(Err(err)) => DetectionOutcome::Failed { error: err.to_string() },
        // dropping the timed-out future drops the child, which kills it (kill_on_drop)
        Err(_) => DetectionOutcome::TimedOut { limit },
    }
}
