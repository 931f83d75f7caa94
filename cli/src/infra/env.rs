//! Infrastructure implementation of the `Environment` port.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::application::ports::Environment;

/// Reads the real process environment and asks the OS for identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn current_exe(&self) -> std::io::Result<PathBuf> {
        // Resolved by the OS (`_NSGetExecutablePath` on macOS) into a growable
        // buffer, independent of argv[0].
        std::env::current_exe()
    }

    #[cfg(unix)]
    fn uid(&self) -> u32 {
        nix::unistd::getuid().as_raw()
    }

    #[cfg(not(unix))]
    fn uid(&self) -> u32 {
        0
    }
}
