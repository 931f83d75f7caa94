//! launchd identity, descriptor location, and `launchctl` argument vectors.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Stable launchd label of the daemon. Never changes across installs.
pub const LABEL: &str = "com.hkd.daemon";

/// launchd control binary.
pub const LAUNCHCTL: &str = "/bin/launchctl";

/// Per-user agent directory, relative to the home directory.
pub const LAUNCH_AGENTS_DIR: &str = "Library/LaunchAgents";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// `<home>/Library/LaunchAgents/<label>.plist`
#[must_use]
pub fn descriptor_path(home: &Path, label: &str) -> PathBuf {
    home.join(LAUNCH_AGENTS_DIR).join(format!("{label}.plist"))
}

/// Supervisor-scoped identifier used for live control commands,
/// e.g. `gui/501/com.hkd.daemon`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    uid: u32,
    label: String,
}

impl ServiceIdentity {
    /// Identity in the GUI session domain of `uid`.
    #[must_use]
    pub fn gui(uid: u32, label: &str) -> Self {
        Self {
            uid,
            label: label.to_string(),
        }
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gui/{}/{}", self.uid, self.label)
    }
}

/// Observed lifecycle state of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceState {
    Uninstalled,
    InstalledStopped,
    InstalledRunning,
}

impl ServiceState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceState::Uninstalled => "uninstalled",
            ServiceState::InstalledStopped => "installed-stopped",
            ServiceState::InstalledRunning => "installed-running",
        }
    }
}

// ── launchctl argument vectors ───────────────────────────────────────────────

/// `launchctl load -w <descriptor>`
#[must_use]
pub fn load_args(descriptor: &Path) -> Vec<String> {
    launchctl(&["load", "-w", &descriptor.to_string_lossy()])
}

/// `launchctl unload -w <descriptor>`
#[must_use]
pub fn unload_args(descriptor: &Path) -> Vec<String> {
    launchctl(&["unload", "-w", &descriptor.to_string_lossy()])
}

/// `launchctl kickstart -k <identity>`
#[must_use]
pub fn kickstart_args(identity: &ServiceIdentity) -> Vec<String> {
    launchctl(&["kickstart", "-k", &identity.to_string()])
}

/// `launchctl list <label>`; exits 0 only while the label is loaded.
#[must_use]
pub fn list_args(label: &str) -> Vec<String> {
    launchctl(&["list", label])
}

fn launchctl(args: &[&str]) -> Vec<String> {
    std::iter::once(LAUNCHCTL)
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}
