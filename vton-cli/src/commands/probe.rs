//! Probe command surface

use crate::manifest::SetupManifest;
use crate::probe;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Run the read-only environment probe.
pub async fn handle_probe_command(
    root: &Path,
    manifest: &SetupManifest,
    timeout_secs: u64,
) -> Result<()> {
    probe::run_probe(root, manifest, Duration::from_secs(timeout_secs)).await;
    Ok(())
}
