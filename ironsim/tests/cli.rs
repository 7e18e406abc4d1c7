//! CLI integration tests using pre-built binaries
//!
//! Uses `assert_cmd` with `CARGO_BIN_EXE_ironsim` to run the pre-built
//! binary, avoiding the `cargo run` approach which can hang on parallel
//! compile lock contention.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.arg("--help").assert().success();
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.arg("--version").assert().success();
}

#[test]
fn test_short_run_prints_summary() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.args(["--days", "2", "--log-level", "error"])
        .assert()
        .success()
        .stdout(contains("=== Iron Dominion: 1936.1.3 ==="))
        .stdout(contains("Game started! You are playing as Germany"))
        .stdout(contains("Wars: At peace"));
}

#[test]
fn test_scripted_opening_commands() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.args([
        "--days",
        "1",
        "--log-level",
        "error",
        "--declare-war",
        "france",
        "--research",
        "tanks",
        "--recruit",
        "2",
    ])
    .assert()
    .success()
    .stdout(contains("War declared on France!"))
    .stdout(contains("Started researching Basic Tank"))
    .stdout(contains("Wars: War with France"))
    .stdout(contains("26 infantry"));
}

#[test]
fn test_unknown_nation_is_a_usage_error() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.args(["--declare-war", "atlantis"])
        .assert()
        .failure()
        .stderr(contains("atlantis"));
}

#[test]
fn test_same_seed_same_output() {
    let run = || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
        let output = cmd
            .args([
                "--days",
                "90",
                "--seed",
                "777",
                "--speed",
                "3",
                "--log-level",
                "error",
                "--declare-war",
                "ussr",
            ])
            .output()
            .expect("binary runs");
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_events_out_writes_jsonl() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ironsim"));
    cmd.args([
        "--days",
        "1",
        "--log-level",
        "error",
        "--declare-war",
        "japan",
        "--events-out",
    ])
    .arg(&path)
    .assert()
    .success();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert!(lines
        .next()
        .is_some_and(|line| line.contains(r#""type":"game_started""#)));
    assert!(contents.contains(r#""type":"war_declared","nation":"japan""#));
}
