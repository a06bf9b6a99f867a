//! Probe behavior against throwaway roots.
//!
//! The detection subprocess itself is covered by unit tests; these stay on
//! the read-only reporting paths so they run the same on any host.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn vton(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vton-cli").expect("binary builds");
    cmd.arg("--root").arg(root);
    cmd
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn empty_root_reports_every_absence_and_spawns_nothing() {
    let root = TempDir::new().unwrap();

    let output = vton(root.path()).args(["probe", "--timeout", "5"]).output().unwrap();
    assert!(output.status.success());
    let transcript = stdout_of(&output);
    assert!(transcript.contains("static/test_img exists: false"));
    assert!(transcript.contains("static/data exists: false"));
    assert!(transcript.contains("static/result exists: false"));
    assert!(transcript.contains("cp_vton_gmm.onnx: false"));
    assert!(transcript.contains("pose_iter_440000.caffemodel: false"));
    assert!(!transcript.contains("Testing detection"));
}

#[test]
fn probe_lists_files_and_selects_first_images() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("static/test_img")).unwrap();
    fs::create_dir_all(root.path().join("static/data")).unwrap();
    fs::create_dir_all(root.path().join("static/result")).unwrap();
    for name in ["a.txt", "b.jpg", "c.png"] {
        fs::write(root.path().join("static/test_img").join(name), b"x").unwrap();
    }
    for name in ["d.gif", "e.jpeg"] {
        fs::write(root.path().join("static/data").join(name), b"x").unwrap();
    }

    let output = vton(root.path()).arg("probe").output().unwrap();
    assert!(output.status.success());
    let transcript = stdout_of(&output);
    assert!(transcript.contains("static/test_img exists: true"));
    assert!(transcript.contains(r#""a.txt", "b.jpg", "c.png""#));
    // first usable image per directory, in sorted order: never a.txt, never d.gif
    assert!(transcript.contains("Person: static/test_img/b.jpg"));
    assert!(transcript.contains("Cloth: static/data/e.jpeg"));
}

#[test]
fn garment_listing_shows_first_five_only() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("static/data")).unwrap();
    for i in 0..7 {
        fs::write(root.path().join("static/data").join(format!("a{i}.jpg")), b"x").unwrap();
    }

    let output = vton(root.path()).arg("probe").output().unwrap();
    assert!(output.status.success());
    let transcript = stdout_of(&output);
    assert!(transcript.contains(r#""a4.jpg"]..."#));
    assert!(!transcript.contains("a5.jpg"));
    assert!(!transcript.contains("a6.jpg"));
}

#[test]
fn non_image_samples_do_not_trigger_a_detection_run() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("static/test_img")).unwrap();
    fs::create_dir_all(root.path().join("static/data")).unwrap();
    fs::write(root.path().join("static/test_img/readme.txt"), b"x").unwrap();
    fs::write(root.path().join("static/data/mesh.obj"), b"x").unwrap();

    let output = vton(root.path()).arg("probe").output().unwrap();
    assert!(output.status.success());
    let transcript = stdout_of(&output);
    assert!(transcript.contains("static/test_img exists: true"));
    assert!(!transcript.contains("Testing detection"));
}
