//! Integration tests for the `office-hours` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render and check
//! subcommands through the actual binary, including stdin input, TOML and JSON
//! configuration files, translations and the past-special-date handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: absolute path of a fixture file.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Helper: run `render` with the given extra arguments and parse stdout as JSON.
fn render(args: &[&str]) -> Value {
    let output = Command::cargo_bin("office-hours")
        .unwrap()
        .arg("render")
        .args(args)
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "render failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("render prints JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Render subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_plugin_section_from_json_file() {
    let data = render(&["-i", &fixture("week.json"), "--today", "2026-10-15"]);

    let days: Vec<&str> = data["openinghours"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["dayKey"].as_str().unwrap())
        .collect();
    assert_eq!(days, vec!["monday", "tuesday", "wednesday", "thursday", "friday"]);

    let monday = &data["openinghours"][0];
    assert_eq!(monday["dayName"], "Monday");
    assert_eq!(monday["entries"][0]["start"], "08");
    assert_eq!(monday["entries"][0]["end"], "12");
    assert_eq!(monday["entries"][1]["start"], "13");
    assert_eq!(monday["entries"][1]["end"], "17:30");

    assert_eq!(data["openinghours"][1]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(data["openinghours"][2]["entries"].as_array().unwrap().len(), 0);

    assert_eq!(data["specialOpenings"][0]["date"], "2026-12-24");
    assert_eq!(data["specialOpenings"][0]["languageKey"], "THURSDAY");
    assert_eq!(data["closedDays"], serde_json::json!([]));
}

#[test]
fn render_reads_stdin() {
    let input = std::fs::read_to_string(fixture("clean.json")).unwrap();

    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["render", "--compact", "--today", "2026-10-15"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""languageKey":"TUESDAY""#))
        .stdout(predicate::str::contains(r#""start":"09:00""#));
}

#[test]
fn render_site_toml_with_past_special_date_prints_null() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["render", "-i", &fixture("site.toml"), "--today", "2026-10-15"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn render_skip_past_keeps_weekly_schedule() {
    let data = render(&[
        "-i",
        &fixture("site.toml"),
        "--today",
        "2026-10-15",
        "--skip-past",
    ]);
    assert_eq!(data["openinghours"].as_array().unwrap().len(), 1);
    assert_eq!(data["openinghours"][0]["entries"][0]["start"], "08:30");
    assert_eq!(data["specialOpenings"], serde_json::json!([]));
}

#[test]
fn render_with_translations() {
    let data = render(&[
        "-i",
        &fixture("week.json"),
        "--today",
        "2026-10-15",
        "--translations",
        &fixture("translations_de.json"),
    ]);
    assert_eq!(data["openinghours"][0]["dayName"], "Montag");
    assert_eq!(data["openinghours"][1]["dayName"], "Tuesday");
    assert_eq!(data["specialOpenings"][0]["dayName"], "Donnerstag");
}

#[test]
fn render_to_output_file() {
    let output_path = std::env::temp_dir().join("office-hours-render-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["render", "-i", &fixture("clean.json"), "--today", "2026-10-15", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["openinghours"].as_array().unwrap().len(), 2);
    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn render_rejects_unknown_timezone() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["render", "-i", &fixture("clean.json"), "--timezone", "Nowhere/Land"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timezone"));
}

#[test]
fn render_rejects_invalid_json() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .arg("render")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn render_missing_file_fails() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["render", "-i", "/nonexistent/office-hours.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_dropped_rows() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["check", "-i", &fixture("week.json")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("monday: 08:00-12:00, 13:00-17:30"))
        .stdout(predicate::str::contains(
            "  dropped #2 11:00-13:00: overlaps 09:00-12:00",
        ))
        .stdout(predicate::str::contains("wednesday: closed"))
        .stdout(predicate::str::contains("  dropped #1 09:00-09:00: start equals end"))
        .stdout(predicate::str::contains("saturday (hidden): 10:00-12:00"))
        .stdout(predicate::str::contains("2026-12-24: 09:00-12:00"))
        .stderr(predicate::str::contains("2 row(s) dropped"));
}

#[test]
fn check_clean_configuration_succeeds() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .args(["check", "-i", &fixture("clean.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("monday: 09:00-17:00"));
}

#[test]
fn check_reports_malformed_time() {
    Command::cargo_bin("office-hours")
        .unwrap()
        .arg("check")
        .write_stdin(r#"{"openinghours": {"friday": {"entries": [{"start": "9am", "end": "17:00"}]}}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("friday: closed"))
        .stdout(predicate::str::contains("Invalid time format"));
}
