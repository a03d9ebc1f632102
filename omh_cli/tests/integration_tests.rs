//! Integration tests for the omh binary.
//!
//! These tests verify end-to-end behavior including:
//! - Schema listing
//! - Document checking, from files and stdin
//! - Canonical re-encoding
//! - Configuration overrides

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEART_RATE: &str = r#"{
  "user_notes": "I felt quite dizzy",
  "heart_rate": {"unit": "beats/min", "value": 50.0},
  "effective_time_frame": {"date_time": "2013-02-05T07:25:00Z"},
  "temporal_relationship_to_physical_activity": "at rest"
}"#;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from any user configuration
fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("omh"));
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/omh-test-config");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_document(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write document");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Validate and normalize Open mHealth measure documents",
        ));
}

#[test]
fn test_schemas_lists_every_measure() {
    cli()
        .arg("schemas")
        .assert()
        .success()
        .stdout(predicate::str::contains("omh:heart-rate:1.0"))
        .stdout(predicate::str::contains("schema/omh/physical-activity-1.0.json"))
        .stdout(predicate::str::contains("minutes-moderate-activity"))
        .stdout(predicate::str::contains("blood-glucose"));
}

#[test]
fn test_check_valid_document() {
    let temp_dir = setup_test_dir();
    let path = write_document(&temp_dir, "heart-rate.json", HEART_RATE);

    cli()
        .args(["check", "--schema", "heart-rate"])
        .arg(&path)
        .assert()
        .success()
        .stdout("valid omh:heart-rate:1.0\n");
}

#[test]
fn test_check_reads_stdin() {
    cli()
        .args(["check", "--schema", "step-count", "-"])
        .write_stdin(r#"{"step_count": 6000}"#)
        .assert()
        .success()
        .stdout("valid omh:step-count:1.0\n");
}

#[test]
fn test_check_reports_missing_required_value() {
    cli()
        .args(["check", "--schema", "physical-activity", "-"])
        .write_stdin(r#"{"distance": {"value": 1.5, "unit": "mi"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid (absent value)"))
        .stderr(predicate::str::contains("activity_name"));
}

#[test]
fn test_check_reports_disallowed_unit() {
    cli()
        .args(["check", "--schema", "minutes-moderate-activity", "-"])
        .write_stdin(r#"{"minutes_moderate_activity": {"value": 1, "unit": "h"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid (invalid argument)"))
        .stderr(predicate::str::contains("minutes_moderate_activity.unit"));
}

#[test]
fn test_check_reports_ambiguous_time_frame() {
    let document = r#"{
        "heart_rate": {"value": 60, "unit": "beats/min"},
        "effective_time_frame": {
            "date_time": "2013-02-05T07:25:00Z",
            "time_interval": {"date": "2013-02-05", "part_of_day": "morning"}
        }
    }"#;

    cli()
        .args(["check", "--schema", "heart-rate", "-"])
        .write_stdin(document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid (structural)"));
}

#[test]
fn test_strict_rejects_unknown_properties() {
    let document = r#"{"heart_rate": {"value": 60, "unit": "beats/min"}, "device": "watch"}"#;

    cli()
        .args(["check", "--schema", "heart-rate", "-"])
        .write_stdin(document)
        .assert()
        .success();

    cli()
        .args(["check", "--schema", "heart-rate", "--strict", "-"])
        .write_stdin(document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognised property \"device\""));
}

#[test]
fn test_unknown_schema_name() {
    cli()
        .args(["check", "--schema", "blood-pressure", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown schema \"blood-pressure\""))
        .stderr(predicate::str::contains("heart-rate"));
}

#[test]
fn test_missing_file() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["check", "--schema", "heart-rate"])
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn test_normalize_writes_canonical_document() {
    let temp_dir = setup_test_dir();
    let path = write_document(&temp_dir, "heart-rate.json", HEART_RATE);

    let expected = r#"{
    "heart_rate": {
        "value": 50,
        "unit": "beats/min"
    },
    "effective_time_frame": {
        "date_time": "2013-02-05T07:25:00Z"
    },
    "temporal_relationship_to_physical_activity": "at rest",
    "user_notes": "I felt quite dizzy"
}
"#;

    cli()
        .args(["normalize", "--schema", "heart-rate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_normalize_compact_output_is_stable() {
    let output = cli()
        .args(["normalize", "--schema", "heart-rate", "--compact", "-"])
        .write_stdin(HEART_RATE)
        .output()
        .expect("Failed to run omh");
    assert!(output.status.success());

    let first = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        first.trim_end(),
        r#"{"heart_rate":{"value":50,"unit":"beats/min"},"effective_time_frame":{"date_time":"2013-02-05T07:25:00Z"},"temporal_relationship_to_physical_activity":"at rest","user_notes":"I felt quite dizzy"}"#
    );

    // Normalizing canonical output again changes nothing
    cli()
        .args(["normalize", "--schema", "heart-rate", "--compact", "-"])
        .write_stdin(first.clone())
        .assert()
        .success()
        .stdout(predicate::str::diff(first));
}

#[test]
fn test_config_file_controls_indent_and_strictness() {
    let temp_dir = setup_test_dir();
    let config = write_document(
        &temp_dir,
        "config.toml",
        "[output]\nindent = 2\n\n[input]\nunknown_fields = \"reject\"\n",
    );

    cli()
        .arg("--config")
        .arg(&config)
        .args(["normalize", "--schema", "body-weight", "-"])
        .write_stdin(r#"{"body_weight": {"value": 160, "unit": "lb"}}"#)
        .assert()
        .success()
        .stdout("{\n  \"body_weight\": {\n    \"value\": 160,\n    \"unit\": \"lb\"\n  }\n}\n");

    cli()
        .arg("--config")
        .arg(&config)
        .args(["check", "--schema", "body-weight", "-"])
        .write_stdin(r#"{"body_weight": {"value": 160, "unit": "lb"}, "source": "scale"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognised property \"source\""));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = setup_test_dir();
    let config = write_document(&temp_dir, "config.toml", "[output]\nindent = 99\n");

    cli()
        .arg("--config")
        .arg(&config)
        .arg("schemas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("output.indent"));
}
