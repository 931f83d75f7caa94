//! Descriptor construction from the invocation environment.

use crate::application::ports::Environment;
use crate::application::services::paths::{executable_path, require_var};
use crate::domain::descriptor::ServiceDescriptor;
use crate::domain::error::ConfigurationError;

/// Assemble the descriptor record for the current user and executable.
///
/// `USER` and `PATH` are mandatory: the daemon launches other programs at
/// runtime and must not start with an unset `PATH`.
///
/// # Errors
///
/// Returns a `ConfigurationError` if `USER` or `PATH` is unusable or the
/// executable path cannot be resolved.
pub fn descriptor(env: &impl Environment) -> Result<ServiceDescriptor, ConfigurationError> {
    let user = require_var(env, "USER")?;
    let path_env = require_var(env, "PATH")?;
    let program = executable_path(env)?;
    Ok(ServiceDescriptor::for_daemon(&program, &path_env, &user))
}

/// Rendered descriptor content. A deterministic function of
/// (executable path, `PATH`, `USER`).
///
/// # Errors
///
/// See [`descriptor`].
pub fn build(env: &impl Environment) -> Result<String, ConfigurationError> {
    Ok(descriptor(env)?.render())
}
