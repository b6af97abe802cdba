//! One-shot configure flow tests
//!
//! The wizard needs a terminal, so everything here drives the flag form:
//! apply selections, price, preview or submit.

mod common;

use common::{sartor, seed_default_profile, seed_profile, setup_workspace, submit_suit};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Validation Gate Tests
// ============================================================================

#[test]
fn test_submit_without_selections_lists_every_gap() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still required"))
        .stderr(predicate::str::contains("fabric"))
        .stderr(predicate::str::contains("color"))
        .stderr(predicate::str::contains("style"))
        .stderr(predicate::str::contains("measurements"));
}

#[test]
fn test_partial_selection_previews_and_exits_ok() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--fabric", "cotton-twill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your configuration"))
        .stdout(predicate::str::contains("Cotton twill"))
        .stdout(predicate::str::contains("no color selected yet"))
        .stdout(predicate::str::contains("$1,300.00"))
        .stdout(predicate::str::contains(
            "Complete the selection and rerun with --submit.",
        ));
}

#[test]
fn test_unknown_fabric_fails_with_catalog_help() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--fabric", "velvet", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No fabric with id 'velvet'"))
        .stderr(predicate::str::contains("Available fabrics"));
}

#[test]
fn test_unknown_color_fails_with_catalog_help() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--color", "chartreuse", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No color with id 'chartreuse'"))
        .stderr(predicate::str::contains("Available colors"));
}

#[test]
fn test_invalid_suit_type_fails() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--suit-type", "tuxedo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid suit type"));
}

#[test]
fn test_invalid_button_count_fails() {
    let tmp = setup_workspace();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--buttons", "five"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid button count"));
}

// ============================================================================
// Pricing Tests
// ============================================================================

#[test]
fn test_dry_run_prices_without_writing() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--fabric",
            "cashmere-blend",
            "--color",
            "midnight-navy",
            "--style",
            "classic",
            "--profile",
            "fit",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2,000.00"))
        .stdout(predicate::str::contains("Dry run; nothing was written."));

    let cart_entries = fs::read_dir(tmp.path().join("cart")).unwrap().count();
    assert_eq!(cart_entries, 0);
}

#[test]
fn test_negative_fabric_delta_discounts() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--fabric",
            "cotton-twill",
            "--color",
            "charcoal",
            "--style",
            "slim",
            "--profile",
            "fit",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,300.00"));
}

#[test]
fn test_three_piece_base_price_applies() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--suit-type",
            "three-piece",
            "--fabric",
            "cashmere-blend",
            "--color",
            "midnight-navy",
            "--style",
            "classic",
            "--profile",
            "fit",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Three-piece suit"))
        .stdout(predicate::str::contains("$2,350.00"));
}

// ============================================================================
// Submission Tests
// ============================================================================

#[test]
fn test_submit_announces_the_receipt() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--fabric",
            "wool-super120",
            "--color",
            "stone-beige",
            "--style",
            "double-breasted",
            "--profile",
            "fit",
            "--submit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to cart: LNI-"));
}

#[test]
fn test_submit_writes_round_trippable_cart_record() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    let id = submit_suit(&tmp, "cotton-twill", "midnight-navy");
    assert!(id.starts_with("LNI-"));

    let path = tmp.path().join("cart").join(format!("{}.sartor.yaml", id));
    assert!(path.exists());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&format!("correlationId: {}", id)));
    assert!(content.contains("suitType: two-piece"));
    assert!(content.contains("fabricId: cotton-twill"));
    assert!(content.contains("colorId: midnight-navy"));
    assert!(content.contains("styleId: classic"));
    assert!(content.contains("price: 130000"));
    assert!(content.contains("buttons: two"));
    assert!(content.contains("lapel: notch"));
    assert!(content.contains("measurementProfileId: MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0"));
    assert!(content.contains("submitted_at:"));
    assert!(content.contains("author: fitter"));
    assert!(content.contains("catalog_fingerprint:"));

    // The record reads back through cart show
    sartor()
        .current_dir(tmp.path())
        .args(["cart", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cotton twill"))
        .stdout(predicate::str::contains("$1,300.00"));
}

#[test]
fn test_detail_flags_override_defaults() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "configure",
            "--fabric",
            "irish-linen",
            "--color",
            "stone-beige",
            "--style",
            "slim",
            "--buttons",
            "three",
            "--lapel",
            "peak",
            "--vent",
            "side",
            "--pocket",
            "patch",
            "--lining",
            "half",
            "--profile",
            "fit",
            "--submit",
        ])
        .assert()
        .success();

    let cart_dir = tmp.path().join("cart");
    let entry = fs::read_dir(&cart_dir).unwrap().next().unwrap().unwrap();
    let content = fs::read_to_string(entry.path()).unwrap();
    assert!(content.contains("buttons: three"));
    assert!(content.contains("lapel: peak"));
    assert!(content.contains("vent: side"));
    assert!(content.contains("pocket: patch"));
    assert!(content.contains("lining: half"));
}

#[test]
fn test_each_submission_gets_its_own_id() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    let first = submit_suit(&tmp, "cotton-twill", "charcoal");
    let second = submit_suit(&tmp, "cotton-twill", "charcoal");

    assert!(first.starts_with("LNI-"));
    assert!(second.starts_with("LNI-"));
    assert_ne!(first, second);
    assert_eq!(fs::read_dir(tmp.path().join("cart")).unwrap().count(), 2);
}

// ============================================================================
// Machine Output Tests
// ============================================================================

#[test]
fn test_json_output_is_machine_readable() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    let output = sartor()
        .current_dir(tmp.path())
        .args([
            "-o",
            "json",
            "configure",
            "--fabric",
            "cashmere-blend",
            "--color",
            "midnight-navy",
            "--style",
            "classic",
            "--profile",
            "fit",
            "--dry-run",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let item: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(item["fabricId"], "cashmere-blend");
    assert_eq!(item["suitType"], "two-piece");
    assert_eq!(item["price"], 200000);
    assert!(item["correlationId"]
        .as_str()
        .unwrap()
        .starts_with("LNI-"));
}

#[test]
fn test_yaml_submit_keeps_stdout_machine_readable() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args([
            "-o",
            "yaml",
            "configure",
            "--fabric",
            "cotton-twill",
            "--color",
            "charcoal",
            "--style",
            "classic",
            "--profile",
            "fit",
            "--submit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("correlationId: LNI-"))
        .stdout(predicate::str::contains("price: 130000"))
        .stdout(predicate::str::contains("Added to cart").not())
        .stderr(predicate::str::contains("Added to cart: LNI-"));
}

// ============================================================================
// Profile Resolution Tests
// ============================================================================

#[test]
fn test_unknown_profile_fails() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--profile", "ghost", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No measurement profile matching"));
}

#[test]
fn test_profile_owned_by_someone_else_is_invisible() {
    let tmp = setup_workspace();
    seed_profile(
        &tmp,
        "MSR-01JF8AC9V2M3N4P5Q6R7S8T9E1",
        "Sam's fit",
        "sam",
        "2026-02-01T10:00:00Z",
    );

    // The configured author is "fitter"; sam's profile is private to sam
    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--profile", "fit", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No measurement profile matching"));
}

#[test]
fn test_ambiguous_profile_query_fails() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);
    seed_profile(
        &tmp,
        "MSR-01JF8AC9V2M3N4P5Q6R7S8T9E2",
        "Summer fit",
        "",
        "2026-03-01T10:00:00Z",
    );

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--profile", "fit", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous profile query"));
}

// ============================================================================
// Catalog Failure Tests
// ============================================================================

#[test]
fn test_malformed_catalog_aborts_the_session() {
    let tmp = setup_workspace();
    seed_default_profile(&tmp);
    fs::write(
        tmp.path().join("catalog.sartor.yaml"),
        "base_prices:\n  two_piece: 100000\n  three_piece: 120000\n\
         fabrics:\n  - id: wool\n    name: Wool\n  - id: wool\n    name: Wool again\n\
         colors:\n  - id: navy\n    name: Navy\n    value: \"#000080\"\n\
         styles:\n  - id: classic\n    name: Classic\n",
    )
    .unwrap();

    sartor()
        .current_dir(tmp.path())
        .args(["configure", "--fabric", "wool", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate id 'wool'"));
}
