//! The launchd descriptor for the daemon, built as a typed record and
//! serialized through [`crate::domain::plist`].

use std::collections::BTreeMap;

use crate::domain::plist::{self, Dictionary, Value};
use crate::domain::supervisor::LABEL;

/// Name used to namespace the daemon's log files.
pub const DAEMON_NAME: &str = "hkd";

/// Directory holding the daemon's stdout/stderr logs.
pub const LOG_DIR: &str = "/tmp";

/// Minimum seconds launchd waits between respawns.
pub const THROTTLE_INTERVAL_SECS: u32 = 30;

/// Most favourable scheduling priority.
pub const NICE: i32 = -20;

/// launchd `ProcessType` resource-management class. The daemon reacts to
/// user input, so only the interactive class is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessType {
    Interactive,
}

impl ProcessType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessType::Interactive => "Interactive",
        }
    }
}

/// Everything launchd needs to run the daemon as a user agent.
///
/// Constructed per invocation and rendered once; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Reverse-domain service label, always [`LABEL`] for the daemon.
    pub label: String,
    /// Absolute path of the program launchd executes.
    pub program: String,
    /// Environment overrides. Always carries `PATH`.
    pub environment: BTreeMap<String, String>,
    pub stdout_path: String,
    pub stderr_path: String,
    pub run_at_load: bool,
    pub keep_alive: bool,
    pub throttle_interval: u32,
    pub process_type: ProcessType,
    pub nice: i32,
}

impl ServiceDescriptor {
    /// Descriptor for the daemon with the fixed supervisor policy.
    ///
    /// `path_env` is embedded verbatim; `user` only namespaces the log files.
    #[must_use]
    pub fn for_daemon(program: &str, path_env: &str, user: &str) -> Self {
        let mut environment = BTreeMap::new();
        environment.insert("PATH".to_string(), path_env.to_string());
        Self {
            label: LABEL.to_string(),
            program: program.to_string(),
            environment,
            stdout_path: log_path(user, "out"),
            stderr_path: log_path(user, "err"),
            run_at_load: true,
            keep_alive: true,
            throttle_interval: THROTTLE_INTERVAL_SECS,
            process_type: ProcessType::Interactive,
            nice: NICE,
        }
    }

    /// Property-list form, keys in the order launchd documentation lists them.
    #[must_use]
    pub fn to_plist(&self) -> Dictionary {
        let mut environment = Dictionary::new();
        for (name, value) in &self.environment {
            environment.insert(name.as_str(), value.as_str());
        }

        let mut root = Dictionary::new();
        root.insert("Label", self.label.as_str());
        root.insert("ProgramArguments", vec![Value::from(self.program.as_str())]);
        root.insert("EnvironmentVariables", environment);
        root.insert("RunAtLoad", self.run_at_load);
        root.insert("KeepAlive", self.keep_alive);
        root.insert("StandardOutPath", self.stdout_path.as_str());
        root.insert("StandardErrorPath", self.stderr_path.as_str());
        root.insert("ThrottleInterval", i64::from(self.throttle_interval));
        root.insert("ProcessType", self.process_type.as_str());
        root.insert("Nice", i64::from(self.nice));
        root
    }

    /// Render the descriptor file content.
    #[must_use]
    pub fn render(&self) -> String {
        plist::to_xml(&self.to_plist())
    }
}

/// Log file for `stream` (`out` or `err`), e.g. `/tmp/hkd_alice.out.log`.
#[must_use]
pub fn log_path(user: &str, stream: &str) -> String {
    format!("{LOG_DIR}/{DAEMON_NAME}_{user}.{stream}.log")
}
