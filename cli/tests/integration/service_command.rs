//! Integration tests for `hkd service` against a throwaway home directory.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

struct Home {
    dir: tempfile::TempDir,
}

impl Home {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("Library")).expect("Library");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn descriptor(&self) -> PathBuf {
        self.path()
            .join("Library/LaunchAgents/com.hkd.daemon.plist")
    }

    fn hkd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hkd"));
        cmd.env("NO_COLOR", "1")
            .env("HOME", self.path())
            .env("USER", "tester")
            .env("PATH", "/usr/local/bin:/usr/bin:/bin")
            .env_remove("HKD_LOG");
        cmd
    }
}

#[test]
fn print_renders_descriptor_without_writing() {
    let home = Home::new();
    home.hkd()
        .args(["service", "print"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        .stdout(predicate::str::contains("<string>com.hkd.daemon</string>"))
        .stdout(predicate::str::contains("<string>/usr/local/bin:/usr/bin:/bin</string>"))
        .stdout(predicate::str::contains("<string>/tmp/hkd_tester.out.log</string>"))
        .stdout(predicate::str::contains("<integer>-20</integer>"));
    assert!(!home.descriptor().exists());
}

#[test]
fn print_is_deterministic() {
    let home = Home::new();
    let first = home.hkd().args(["service", "print"]).output().expect("run");
    let second = home.hkd().args(["service", "print"]).output().expect("run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn print_requires_user() {
    let home = Home::new();
    home.hkd()
        .env_remove("USER")
        .args(["service", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'USER' is not set"));
}

#[test]
fn install_writes_descriptor_once() {
    let home = Home::new();
    home.hkd().args(["service", "install"]).assert().success();
    assert!(home.descriptor().exists());
    let content = std::fs::read_to_string(home.descriptor()).expect("read");

    home.hkd()
        .args(["service", "install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already installed"));
    assert_eq!(
        std::fs::read_to_string(home.descriptor()).expect("read"),
        content
    );
}

#[test]
fn install_without_home_fails() {
    let home = Home::new();
    home.hkd()
        .env_remove("HOME")
        .args(["service", "install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'HOME' is not set"));
}

#[test]
fn uninstall_removes_descriptor() {
    let home = Home::new();
    home.hkd().args(["service", "install"]).assert().success();
    home.hkd().args(["service", "uninstall"]).assert().success();
    assert!(!home.descriptor().exists());

    home.hkd()
        .args(["service", "uninstall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn stop_and_restart_require_descriptor() {
    let home = Home::new();
    for op in ["stop", "restart"] {
        home.hkd()
            .args(["service", op])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not installed"));
    }
    assert!(!home.path().join("Library/LaunchAgents").exists());
}

#[test]
fn status_json_reports_uninstalled() {
    let home = Home::new();
    let out = home
        .hkd()
        .args(["service", "status", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["label"], "com.hkd.daemon");
    assert_eq!(v["state"], "uninstalled");
    assert_eq!(
        v["descriptor_path"],
        home.descriptor().display().to_string()
    );
}

#[test]
fn fatal_error_as_json() {
    let home = Home::new();
    let out = home
        .hkd()
        .args(["service", "stop", "--json"])
        .output()
        .expect("run");
    assert!(!out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["error"], true);
    assert!(v["message"].as_str().expect("message").contains("not installed"));
}

#[test]
fn no_color_env_does_not_affect_parsing() {
    let home = Home::new();
    for value in ["1", "", "true", "anything"] {
        home.hkd()
            .env("NO_COLOR", value)
            .args(["service", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("uninstalled"))
            .stderr(predicate::str::contains("--no-color").not());
    }
}

#[test]
fn no_color_flag_is_accepted() {
    let home = Home::new();
    home.hkd()
        .env_remove("NO_COLOR")
        .args(["service", "status", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn lifecycle_result_as_json() {
    let home = Home::new();
    for op in ["install", "uninstall"] {
        let out = home
            .hkd()
            .args(["service", op, "--json"])
            .output()
            .expect("run");
        assert!(out.status.success(), "{op} failed");
        let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
        assert_eq!(v["operation"], op);
        assert_eq!(v["exit_code"], 0);
    }
    assert!(!home.descriptor().exists());
}
