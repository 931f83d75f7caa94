//! Path resolution: descriptor location, own executable, service identity.
//!
//! Pure queries over the `Environment` port. Nothing is cached; every call
//! re-derives its answer.

use std::path::{Path, PathBuf};

use crate::application::ports::Environment;
use crate::domain::error::ConfigurationError;
use crate::domain::supervisor::{self, LABEL, ServiceIdentity};

/// Read a mandatory environment variable. An empty value counts as unset.
///
/// # Errors
///
/// Returns `MissingVariable` if unset or empty, `NotUnicode` if the value is
/// not valid UTF-8.
pub fn require_var(
    env: &impl Environment,
    name: &'static str,
) -> Result<String, ConfigurationError> {
    let value = env
        .var(name)
        .ok_or(ConfigurationError::MissingVariable(name))?
        .into_string()
        .map_err(|_| ConfigurationError::NotUnicode(name))?;
    if value.is_empty() {
        return Err(ConfigurationError::MissingVariable(name));
    }
    Ok(value)
}

/// `$HOME/Library/LaunchAgents/com.hkd.daemon.plist`
///
/// # Errors
///
/// Returns a `ConfigurationError` if `HOME` is unusable.
pub fn descriptor_path(env: &impl Environment) -> Result<PathBuf, ConfigurationError> {
    let home = require_var(env, "HOME")?;
    Ok(supervisor::descriptor_path(Path::new(&home), LABEL))
}

/// Absolute path of the running executable, as a string for embedding.
///
/// # Errors
///
/// Returns `ExecutablePath` if the OS cannot resolve the path, or the result
/// is relative or not valid UTF-8.
pub fn executable_path(env: &impl Environment) -> Result<String, ConfigurationError> {
    let exe = env
        .current_exe()
        .map_err(|e| ConfigurationError::ExecutablePath(e.to_string()))?;
    if !exe.is_absolute() {
        return Err(ConfigurationError::ExecutablePath(format!(
            "'{}' is not absolute",
            exe.display()
        )));
    }
    exe.into_os_string().into_string().map_err(|raw| {
        ConfigurationError::ExecutablePath(format!(
            "'{}' is not valid UTF-8",
            Path::new(&raw).display()
        ))
    })
}

/// `gui/<uid>/com.hkd.daemon` for the invoking user.
pub fn service_identity(env: &impl Environment) -> ServiceIdentity {
    ServiceIdentity::gui(env.uid(), LABEL)
}
