//! CLI and basic command tests

mod common;

use common::{sartor, setup_workspace};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    sartor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configure a suit"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("profiles"));
}

#[test]
fn test_version_displays() {
    sartor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sartor"));
}

#[test]
fn test_unknown_command_fails() {
    sartor()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_creates_workspace_structure() {
    let tmp = TempDir::new().unwrap();

    sartor()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized sartor workspace"))
        .stdout(predicate::str::contains("Next steps:"));

    // Verify structure
    assert!(tmp.path().join(".sartor").is_dir());
    assert!(tmp.path().join(".sartor/config.yaml").exists());
    assert!(tmp.path().join("catalog.sartor.yaml").exists());
    assert!(tmp.path().join("profiles").is_dir());
    assert!(tmp.path().join("cart").is_dir());
}

#[test]
fn test_init_writes_sample_profile() {
    let tmp = TempDir::new().unwrap();

    sartor().current_dir(tmp.path()).arg("init").assert().success();

    let profiles: Vec<_> = fs::read_dir(tmp.path().join("profiles"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(profiles.len(), 1);
    let name = profiles[0].file_name().to_string_lossy().to_string();
    assert!(name.starts_with("MSR-"));
    assert!(name.ends_with(".sartor.yaml"));

    let content = fs::read_to_string(profiles[0].path()).unwrap();
    assert!(content.contains("Sample fit"));
    assert!(content.contains("height_cm: 180"));
}

#[test]
fn test_init_no_sample_profile_leaves_profiles_empty() {
    let tmp = TempDir::new().unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["init", "--no-sample-profile"])
        .assert()
        .success();

    let count = fs::read_dir(tmp.path().join("profiles")).unwrap().count();
    assert_eq!(count, 0);
}

#[test]
fn test_init_with_name_brands_the_catalog() {
    let tmp = TempDir::new().unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["init", "--name", "Atelier Nord"])
        .assert()
        .success();

    let catalog = fs::read_to_string(tmp.path().join("catalog.sartor.yaml")).unwrap();
    assert!(catalog.contains("Atelier Nord"));
}

#[test]
fn test_init_twice_fails() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_keeps_existing_catalog() {
    let tmp = TempDir::new().unwrap();
    let custom = "name: Hand-rolled\nbase_prices:\n  two_piece: 90000\n  three_piece: 110000\nfabrics:\n  - id: tweed\n    name: Tweed\ncolors:\n  - id: grey\n    name: Grey\n    value: \"#808080\"\nstyles:\n  - id: classic\n    name: Classic\n";
    fs::write(tmp.path().join("catalog.sartor.yaml"), custom).unwrap();

    sartor()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept existing catalog"));

    let after = fs::read_to_string(tmp.path().join("catalog.sartor.yaml")).unwrap();
    assert_eq!(after, custom);
}

// ============================================================================
// Not In Workspace Test
// ============================================================================

#[test]
fn test_not_in_workspace_fails() {
    let tmp = TempDir::new().unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["catalog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not inside a sartor"))
        .stderr(predicate::str::contains("sartor init"));
}

// ============================================================================
// Global Format Flag Tests
// ============================================================================

#[test]
fn test_global_format_flag_json() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["-o", "json", "catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fabrics\""))
        .stdout(predicate::str::contains("\"cashmere-blend\""));
}

#[test]
fn test_global_format_flag_after_subcommand() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["catalog", "list", "-o", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fabrics:"))
        .stdout(predicate::str::contains("id: cashmere-blend"));
}

#[test]
fn test_invalid_format_option_fails() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["catalog", "list", "-o", "marble"])
        .assert()
        .failure();
}

// ============================================================================
// Completions Command Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    sartor()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sartor"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    sartor().args(["completions", "dos"]).assert().failure();
}
