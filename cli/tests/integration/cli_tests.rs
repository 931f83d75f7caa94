//! Integration tests for the CLI skeleton: help, version, argument errors.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn hkd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hkd"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    hkd().assert().code(2).stderr(predicate::str::contains(
        "Run the hkd hotkey daemon as a launchd user agent",
    ));
}

#[test]
fn test_cli_help_lists_service_command() {
    hkd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("service"));
}

#[test]
fn test_service_help_lists_operations() {
    let assert = hkd().args(["service", "--help"]).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    for op in ["install", "uninstall", "start", "stop", "restart", "status", "print"] {
        assert!(out.contains(op), "missing {op} in:\n{out}");
    }
}

#[test]
fn test_cli_version_flag_shows_version() {
    hkd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hkd"));
}

#[test]
fn test_version_command_json() {
    hkd()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"version":""#));
}

#[test]
fn test_unknown_service_operation_fails() {
    hkd().args(["service", "reload"]).assert().code(2);
}

#[test]
fn test_empty_no_color_env_is_ignored() {
    hkd()
        .env("NO_COLOR", "")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hkd "));
}
