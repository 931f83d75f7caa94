//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Callers that need the kind recover it with
//! `anyhow::Error::downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// The invocation environment cannot describe the service.
///
/// These are fatal for the current operation but never abort the process, so
/// a host embedding the lifecycle logic keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("environment variable '{0}' is not set")]
    MissingVariable(&'static str),

    #[error("environment variable '{0}' is not valid UTF-8")]
    NotUnicode(&'static str),

    #[error("unable to retrieve path of executable: {0}")]
    ExecutablePath(String),
}

// ── Service errors ────────────────────────────────────────────────────────────

/// Lifecycle preconditions that were not met.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("service file '{}' is already installed", .0.display())]
    AlreadyInstalled(PathBuf),

    #[error("service file '{}' is not installed. Run 'hkd service install' first.", .0.display())]
    NotInstalled(PathBuf),

    #[error("service file '{}' could not be installed", .0.display())]
    InstallFailed(PathBuf),
}
