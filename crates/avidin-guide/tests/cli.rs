//! CLI surface checks: argument validation must fail fast, before any
//! workspace or network side effect.

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn test_help_runs() {
    Command::cargo_bin("avidin")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn test_rejects_out_of_range_masking_fraction() {
    let tmp = tempdir().unwrap();
    let output = Command::cargo_bin("avidin")
        .unwrap()
        .current_dir(tmp.path())
        .args(["--smiles", "CCO", "--masking-fraction", "1.5"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("masking fraction"), "stderr: {stderr}");
    // validation failed before the default workspace was created
    assert!(!tmp.path().join("runs").exists());
}

#[test]
fn test_rejects_missing_smiles() {
    let tmp = tempdir().unwrap();
    let output = Command::cargo_bin("avidin")
        .unwrap()
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--smiles"), "stderr: {stderr}");
}

#[test]
fn test_rejects_zero_sequence_length() {
    let tmp = tempdir().unwrap();
    let output = Command::cargo_bin("avidin")
        .unwrap()
        .current_dir(tmp.path())
        .args(["--smiles", "CCO", "--seq-length", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("length"), "stderr: {stderr}");
}
