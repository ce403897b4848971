//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temporary home
//! directory, so state never leaks between tests or into the real
//! config dir.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_scheduly-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("SCHEDULY_ENV")
        .output()
        .expect("failed to execute CLI command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run a CLI command, expect success, and parse its JSON output.
fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("CLI output is JSON")
}

#[test]
fn test_evening_plan_prints_arrival_event() {
    let home = tempfile::tempdir().unwrap();
    let event = run_json(home.path(), &["evening", "plan", "20:00", "--cards", "10"]);

    assert_eq!(event["type"], "ArrivalRecorded");
    assert_eq!(event["arrival"], "20:00");
    assert_eq!(event["window"], "LONG");
    assert_eq!(event["block_count"], 11);
}

#[test]
fn test_evening_window_is_read_only() {
    let home = tempfile::tempdir().unwrap();
    let out = run_json(home.path(), &["evening", "window", "23:30"]);
    assert_eq!(out["window"], "SLEEP_FIRST");
    assert_eq!(out["description"], "Less than 30 min - prioritize sleep");

    // Classification alone never creates a plan.
    let state = run_json(home.path(), &["day", "show"]);
    assert_eq!(state["phase"], "MORNING");
    assert_eq!(state["blocks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_day_show_returns_persisted_state() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "plan", "22:00"]);

    let state = run_json(home.path(), &["day", "show"]);
    assert_eq!(state["phase"], "EVENING");
    assert_eq!(state["arrival_time_home"], "22:00");
    assert_eq!(state["time_window"], "MEDIUM");
    assert!(!state["blocks"].as_array().unwrap().is_empty());
}

#[test]
fn test_day_status_reports_block_progress() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "plan", "20:00"]);

    let report = run_json(home.path(), &["day", "status", "--at", "20:10"]);
    let first = &report.as_array().unwrap()[0];
    assert_eq!(first["id"], "hygiene-evening");
    assert_eq!(first["status"]["kind"], "active");
    assert_eq!(first["status"]["percent"], 33);
}

#[test]
fn test_completing_blocks_round_trips() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "plan", "21:00"]);

    let event = run_json(home.path(), &["day", "complete", "hygiene-evening"]);
    assert_eq!(event["type"], "BlockCompleted");
    assert_eq!(event["block_id"], "hygiene-evening");

    let state = run_json(home.path(), &["day", "show"]);
    assert_eq!(state["blocks"][0]["completed"], true);
}

#[test]
fn test_completing_an_unknown_block_fails() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "plan", "21:00"]);

    let (_, stderr, code) = run_cli(home.path(), &["day", "complete", "no-such-block"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("no-such-block"));
}

#[test]
fn test_morning_start_switches_phase() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "plan", "20:00"]);

    let event = run_json(home.path(), &["morning", "start"]);
    assert_eq!(event["type"], "MorningStarted");
    assert_eq!(event["block_count"], 4);

    let state = run_json(home.path(), &["day", "show"]);
    assert_eq!(state["phase"], "MORNING");
    assert_eq!(state["is_awake"], true);
}

#[test]
fn test_reset_preserves_the_card_backlog() {
    let home = tempfile::tempdir().unwrap();
    run_json(home.path(), &["evening", "cards", "30"]);
    run_json(home.path(), &["evening", "plan", "21:00"]);

    run_json(home.path(), &["day", "reset"]);
    let state = run_json(home.path(), &["day", "show"]);
    assert_eq!(state["review_cards_remaining"], 30);
    assert_eq!(state["blocks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_malformed_time_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["evening", "plan", "9pm"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_out_of_range_card_count_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["evening", "cards", "500"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("maximum of 200"));
}
