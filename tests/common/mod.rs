//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Author pinned through the environment so ownership is deterministic
pub const AUTHOR: &str = "fitter";

/// Helper to get a sartor command
pub fn sartor() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("sartor"));
    cmd.env("SARTOR_AUTHOR", AUTHOR);
    cmd
}

/// Helper to create a workspace in a temp directory (no sample profile)
pub fn setup_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    sartor()
        .current_dir(tmp.path())
        .args(["init", "--no-sample-profile"])
        .assert()
        .success();
    tmp
}

/// Write one measurement profile file directly into profiles/
///
/// The author is quoted so an empty string stays a string instead of
/// turning into YAML null.
pub fn seed_profile(tmp: &TempDir, id: &str, name: &str, author: &str, created: &str) {
    let content = format!(
        r#"id: {id}
name: "{name}"
height_cm: 182.0
chest_cm: 100.0
waist_cm: 86.0
created: {created}
author: "{author}"
"#,
        id = id,
        name = name,
        created = created,
        author = author,
    );
    fs::write(
        tmp.path().join("profiles").join(format!("{}.sartor.yaml", id)),
        content,
    )
    .unwrap();
}

/// Seed the profile most tests select with `--profile fit`
pub fn seed_default_profile(tmp: &TempDir) {
    seed_profile(
        tmp,
        "MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0",
        "Work suit fit",
        "",
        "2026-01-12T09:30:00Z",
    );
}

/// Submit a fully-specified suit and return the minted LNI id
pub fn submit_suit(tmp: &TempDir, fabric: &str, color: &str) -> String {
    let output = sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--fabric",
            fabric,
            "--color",
            color,
            "--style",
            "classic",
            "--profile",
            "fit",
            "--submit",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find(|l| l.contains("LNI-"))
        .and_then(|l| l.split_whitespace().find(|w| w.starts_with("LNI-")))
        .map(|s| s.to_string())
        .unwrap_or_default()
}
