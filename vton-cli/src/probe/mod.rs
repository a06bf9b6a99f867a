//! Diagnostic probe for the try-on environment
//!
//! Read-only inspection of the directory layout and model artifacts, plus
//! one bounded run of the detection entry point when sample images exist.
//! The probe asserts nothing; it narrates what it finds.

pub mod detection;

use crate::bootstrap::runtime;
use crate::manifest::SetupManifest;
use detection::{run_detection, DetectionCommand, DetectionOutcome};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Sorted file names within `dir`; entries that are not plain files are skipped.
fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// First name whose extension is one of `extensions` (case-insensitive).
pub fn first_image<'a>(names: &'a [String], extensions: &[String]) -> Option<&'a str> {
    names.iter().map(String::as_str).find(|name| {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|accept| accept.eq_ignore_ascii_case(ext)))
    })
}

/// Walk the environment under `root` and report what the pipeline would see.
pub async fn run_probe(root: &Path, manifest: &SetupManifest, limit: Duration) {
    let person_dir = root.join(&manifest.person_dir);
    let garment_dir = root.join(&manifest.garment_dir);
    let result_dir = root.join(&manifest.result_dir);

    println!("Checking directories...");
    println!("{} exists: {}", manifest.person_dir, person_dir.exists());
    println!("{} exists: {}", manifest.garment_dir, garment_dir.exists());
    println!("{} exists: {}", manifest.result_dir, result_dir.exists());

    let person_files = sorted_file_names(&person_dir);
    if person_dir.exists() {
        println!("Files in {}: {:?}", manifest.person_dir, person_files);
    }

    let garment_files = sorted_file_names(&garment_dir);
    if garment_dir.exists() {
        let preview: Vec<&String> = garment_files.iter().take(5).collect();
        println!("Files in {}: {preview:?}...", manifest.garment_dir);
    }

    println!();
    println!("Checking model files...");
    for name in &manifest.model_files {
        println!("{}: {}", name, root.join(name).exists());
    }

    let Some(person) = first_image(&person_files, &manifest.image_extensions) else {
        debug!("no person image available, skipping detection run");
        return;
    };
    let Some(garment) = first_image(&garment_files, &manifest.image_extensions) else {
        debug!("no garment image available, skipping detection run");
        return;
    };

    // relative paths, resolved by the child against its working directory
    let person_path = PathBuf::from(&manifest.person_dir).join(person);
    let garment_path = PathBuf::from(&manifest.garment_dir).join(garment);

    println!();
    println!("Testing detection with:");
    println!("Person: {}", person_path.display());
    println!("Cloth: {}", garment_path.display());

    let Some(python) = runtime::find_interpreter(&manifest.interpreters) else {
        println!("✗ no Python interpreter found; cannot run {}", manifest.detection_script);
        return;
    };

    let command = DetectionCommand::new(
        &python,
        &manifest.detection_script,
        &person_path,
        &garment_path,
    );
    println!("Command: {}", command.rendered());

    match run_detection(&command, root, limit).await {
        DetectionOutcome::Completed { status, stdout, stderr } => {
            match status.code() {
                Some(code) => println!("Return code: {code}"),
                None => println!("Return code: none (terminated by signal)"),
            }
            if !stdout.is_empty() {
                println!("STDOUT: {stdout}");
            }
            if !stderr.is_empty() {
                println!("STDERR: {stderr}");
            }
        }
        DetectionOutcome::TimedOut { limit } => {
            println!("Detection script timed out after {} seconds", limit.as_secs());
        }
        DetectionOutcome::Failed { error } => {
            println!("Error running detection: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn extensions() -> Vec<String> {
        crate::manifest::SetupManifest::default().image_extensions
    }

    #[test]
    fn selects_first_image_by_extension_in_listing_order() {
        let person = names(&["a.txt", "b.jpg", "c.png"]);
        assert_eq!(first_image(&person, &extensions()), Some("b.jpg"));

        let garment = names(&["d.gif", "e.jpeg"]);
        assert_eq!(first_image(&garment, &extensions()), Some("e.jpeg"));
    }

    #[test]
    fn no_image_match_yields_none() {
        assert_eq!(first_image(&names(&["notes.txt", "mesh.obj"]), &extensions()), None);
        assert_eq!(first_image(&[], &extensions()), None);
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(first_image(&names(&["UPPER.JPG"]), &extensions()), Some("UPPER.JPG"));
    }

    #[test]
    fn listing_is_sorted_and_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("a.png"), b"").unwrap();
        assert_eq!(sorted_file_names(dir.path()), ["a.png", "b.jpg"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sorted_file_names(&dir.path().join("nope")).is_empty());
    }
}
