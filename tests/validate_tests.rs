//! Validate command tests

mod common;

use common::{sartor, seed_default_profile, setup_workspace, submit_suit};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Whole-Workspace Validation Tests
// ============================================================================

#[test]
fn test_fresh_workspace_passes_validation() {
    let tmp = TempDir::new().unwrap();
    sartor().current_dir(tmp.path()).arg("init").assert().success();

    sartor()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 2 file(s)"))
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_submitted_line_item_passes_validation() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);
    submit_suit(&tmp, "cotton-twill", "charcoal");

    sartor()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 3 file(s)"))
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_bad_color_value_fails_validation() {
    let tmp = setup_workspace();

    let catalog_path = tmp.path().join("catalog.sartor.yaml");
    let catalog = fs::read_to_string(&catalog_path).unwrap();
    fs::write(&catalog_path, catalog.replace("#191970", "not-a-hex")).unwrap();

    sartor()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 error(s)"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_profile_missing_height_fails_validation() {
    let tmp = setup_workspace();
    fs::write(
        tmp.path().join("profiles/MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0.sartor.yaml"),
        r#"id: MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0
name: "Work suit fit"
chest_cm: 100.0
waist_cm: 86.0
created: 2026-01-12T09:30:00Z
author: ""
"#,
    )
    .unwrap();

    sartor()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 error(s)"))
        .stdout(predicate::str::contains("height_cm"))
        .stderr(predicate::str::contains("Validation failed"));
}

// ============================================================================
// Filtering and Reporting Tests
// ============================================================================

#[test]
fn test_kind_filter_skips_other_files() {
    let tmp = setup_workspace();
    // broken profile that would fail, filtered out by --kind catalog
    fs::write(
        tmp.path().join("profiles/MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0.sartor.yaml"),
        "name: \"Incomplete\"\n",
    )
    .unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["validate", "--kind", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_summary_hides_per_file_errors() {
    let tmp = setup_workspace();
    fs::write(
        tmp.path().join("profiles/MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0.sartor.yaml"),
        "name: \"Incomplete\"\n",
    )
    .unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["validate", "--keep-going", "--summary"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation Summary"))
        .stdout(predicate::str::contains("error(s)").not())
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_unknown_kind_file_is_skipped() {
    let tmp = setup_workspace();
    fs::write(tmp.path().join("notes.sartor.yaml"), "note: hem later\n").unwrap();

    sartor()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown file kind"))
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_validate_explicit_directory() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args(["validate", "profiles/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 1 file(s)"))
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_unknown_kind_flag_fails() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["validate", "--kind", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown file kind"));
}
