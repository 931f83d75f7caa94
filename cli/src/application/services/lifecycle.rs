//! Service lifecycle: install, uninstall, start, stop, restart, status.
//!
//! Each operation re-resolves paths and re-renders content. Fatal conditions
//! (configuration problems, unmet preconditions) are returned as `Err`;
//! propagated failures (file writes, supervisor commands) come back as a
//! non-zero code.
//!
//! Preconditions are checked with `exists` before acting and without a lock,
//! so two concurrent invocations can race on the descriptor file.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, Environment, ProgressReporter, ServiceFs};
use crate::application::services::{descriptor, paths};
use crate::domain::error::ServiceError;
use crate::domain::supervisor::{self, EXIT_FAILURE, EXIT_SUCCESS, LABEL, ServiceState};

/// Snapshot reported by [`status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub label: &'static str,
    pub descriptor_path: PathBuf,
    pub state: ServiceState,
}

/// Write the descriptor file.
///
/// # Errors
///
/// Returns `AlreadyInstalled` if the descriptor exists (the file is left
/// untouched), or a `ConfigurationError` if the environment is incomplete.
pub fn install(
    env: &impl Environment,
    fs: &impl ServiceFs,
    reporter: &impl ProgressReporter,
) -> Result<i32> {
    let path = paths::descriptor_path(env)?;
    if fs.exists(&path) {
        return Err(ServiceError::AlreadyInstalled(path).into());
    }
    install_at(env, fs, reporter, &path)
}

/// Delete the descriptor file.
///
/// # Errors
///
/// Returns `NotInstalled` if there is no descriptor, or a
/// `ConfigurationError` if `HOME` is unusable.
pub fn uninstall(
    env: &impl Environment,
    fs: &impl ServiceFs,
    reporter: &impl ProgressReporter,
) -> Result<i32> {
    let path = require_installed(env, fs)?;
    reporter.step(&format!("removing {}", path.display()));
    match fs.remove(&path) {
        Ok(()) => {
            reporter.success("service file removed");
            Ok(EXIT_SUCCESS)
        }
        Err(error) => {
            warn!(path = %path.display(), error = %format!("{error:#}"), "removing service file failed");
            Ok(EXIT_FAILURE)
        }
    }
}

/// Load the service, installing the descriptor first if it is missing.
///
/// # Errors
///
/// Returns `InstallFailed` if the self-healing install could not write the
/// descriptor, or a `ConfigurationError` if the environment is incomplete.
pub fn start(
    env: &impl Environment,
    fs: &impl ServiceFs,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<i32> {
    let path = paths::descriptor_path(env)?;
    if !fs.exists(&path) {
        reporter.warn(&format!(
            "service file '{}' is not installed, attempting installation",
            path.display()
        ));
        if install_at(env, fs, reporter, &path)? != EXIT_SUCCESS {
            return Err(ServiceError::InstallFailed(path).into());
        }
    }
    reporter.step("loading service");
    Ok(invoke(runner, &supervisor::load_args(&path)))
}

/// Unload the service.
///
/// # Errors
///
/// Returns `NotInstalled` without invoking the supervisor if there is no
/// descriptor.
pub fn stop(
    env: &impl Environment,
    fs: &impl ServiceFs,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<i32> {
    let path = require_installed(env, fs)?;
    reporter.step("unloading service");
    Ok(invoke(runner, &supervisor::unload_args(&path)))
}

/// Kill and restart the running service via its GUI-session identity.
///
/// # Errors
///
/// Returns `NotInstalled` without invoking the supervisor if there is no
/// descriptor.
pub fn restart(
    env: &impl Environment,
    fs: &impl ServiceFs,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<i32> {
    require_installed(env, fs)?;
    let identity = paths::service_identity(env);
    reporter.step(&format!("restarting {identity}"));
    Ok(invoke(runner, &supervisor::kickstart_args(&identity)))
}

/// Observe the lifecycle state. The supervisor is only asked when a
/// descriptor is present.
///
/// # Errors
///
/// Returns a `ConfigurationError` if `HOME` is unusable.
pub fn status(
    env: &impl Environment,
    fs: &impl ServiceFs,
    runner: &impl CommandRunner,
) -> Result<ServiceStatus> {
    let descriptor_path = paths::descriptor_path(env)?;
    let state = if !fs.exists(&descriptor_path) {
        ServiceState::Uninstalled
    } else if runner.probe(&supervisor::list_args(LABEL)) == EXIT_SUCCESS {
        ServiceState::InstalledRunning
    } else {
        ServiceState::InstalledStopped
    };
    Ok(ServiceStatus {
        label: LABEL,
        descriptor_path,
        state,
    })
}

// ── Private helpers ──────────────────────────────────────────────────────────

fn require_installed(env: &impl Environment, fs: &impl ServiceFs) -> Result<PathBuf> {
    let path = paths::descriptor_path(env)?;
    if !fs.exists(&path) {
        return Err(ServiceError::NotInstalled(path).into());
    }
    Ok(path)
}

/// Build, then write. A directory created before a failed write is left in
/// place.
fn install_at(
    env: &impl Environment,
    fs: &impl ServiceFs,
    reporter: &impl ProgressReporter,
    path: &Path,
) -> Result<i32> {
    let content = descriptor::build(env)?;
    reporter.step(&format!("writing {}", path.display()));

    if let Err(error) = fs.ensure_parent_dir(path) {
        warn!(path = %path.display(), error = %format!("{error:#}"), "creating service directory failed");
        return Ok(EXIT_FAILURE);
    }
    if let Err(error) = fs.write(path, &content) {
        warn!(path = %path.display(), error = %format!("{error:#}"), "writing service file failed");
        return Ok(EXIT_FAILURE);
    }

    reporter.success("service file installed");
    Ok(EXIT_SUCCESS)
}

fn invoke(runner: &impl CommandRunner, argv: &[String]) -> i32 {
    debug!(?argv, "invoking supervisor");
    let code = runner.run(argv);
    if code != EXIT_SUCCESS {
        warn!(?argv, code, "supervisor command failed");
    }
    code
}
