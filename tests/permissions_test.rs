//! Permission gate integration tests.
//!
//! These tests drive the gate against real files on disk: a permissions
//! file for each recognized environment, plus the failure shapes the gate
//! must treat as denial (absent file, malformed YAML, missing key).

use metrics_smoketest::PermissionGate;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_permissions(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("permissions.yaml");
    std::fs::write(&path, contents).expect("failed to write permissions file");
    path
}

fn gate_for(contents: &str) -> (TempDir, PermissionGate) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = write_permissions(&dir, contents);
    let gate = PermissionGate::with_config_path(path);
    (dir, gate)
}

#[test]
fn test_dev_environment_is_permitted() {
    let (_dir, gate) = gate_for("global:\n  environment: dev\n");
    assert!(gate.is_permitted());
}

#[test]
fn test_test_environment_is_permitted() {
    let (_dir, gate) = gate_for("global:\n  environment: test\n");
    assert!(gate.is_permitted());
}

#[test]
fn test_production_environment_is_denied() {
    let (_dir, gate) = gate_for("global:\n  environment: production\n");
    assert!(!gate.is_permitted());
}

#[test]
fn test_unrecognized_environment_is_denied() {
    let (_dir, gate) = gate_for("global:\n  environment: staging\n");
    assert!(!gate.is_permitted());
}

#[test]
fn test_missing_environment_key_is_denied() {
    let (_dir, gate) = gate_for("global:\n  uploading_enabled: true\n");
    assert!(!gate.is_permitted());
}

#[test]
fn test_absent_file_is_denied() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let gate = PermissionGate::with_config_path(dir.path().join("does-not-exist.yaml"));
    assert!(!gate.is_permitted());
}

#[test]
fn test_malformed_file_is_denied() {
    let (_dir, gate) = gate_for("global: [not, a, section\n");
    assert!(!gate.is_permitted());
}

#[test]
fn test_extra_sections_are_tolerated() {
    let (_dir, gate) = gate_for(
        "global:\n  environment: dev\nupload:\n  interval_seconds: 30\n",
    );
    assert!(gate.is_permitted());
}
