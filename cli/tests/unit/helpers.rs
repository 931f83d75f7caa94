//! Shared test helpers: an injectable environment and a throwaway home.

#![allow(dead_code)]

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use hkd_cli::application::ports::{Environment, ProgressReporter};

// ── Environment ──────────────────────────────────────────────────────────────

pub struct TestEnv {
    vars: HashMap<&'static str, OsString>,
    exe: PathBuf,
    uid: u32,
}

impl TestEnv {
    /// `HOME`, `USER` and `PATH` set; executable at `/usr/local/bin/hkd`.
    pub fn new(home: &Path, user: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert("HOME", home.as_os_str().to_os_string());
        vars.insert("USER", OsString::from(user));
        vars.insert("PATH", OsString::from("/usr/local/bin:/usr/bin:/bin"));
        Self {
            vars,
            exe: PathBuf::from("/usr/local/bin/hkd"),
            uid: 501,
        }
    }

    pub fn without(mut self, name: &'static str) -> Self {
        self.vars.remove(name);
        self
    }
}

impl Environment for TestEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }

    fn current_exe(&self) -> std::io::Result<PathBuf> {
        Ok(self.exe.clone())
    }

    fn uid(&self) -> u32 {
        self.uid
    }
}

// ── Temporary home ───────────────────────────────────────────────────────────

/// A temp directory laid out like a macOS home (`~/Library` exists,
/// `~/Library/LaunchAgents` does not).
pub struct TempHome {
    dir: tempfile::TempDir,
}

impl TempHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("Library")).expect("Library");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn env(&self) -> TestEnv {
        TestEnv::new(self.path(), "alice")
    }

    pub fn descriptor(&self) -> PathBuf {
        self.path()
            .join("Library")
            .join("LaunchAgents")
            .join("com.hkd.daemon.plist")
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}
