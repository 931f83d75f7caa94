//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `std`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;

// ── Environment Port ──────────────────────────────────────────────────────────

/// Process environment and OS identity queries.
///
/// Injected so lifecycle logic can be tested without mutating the real
/// process environment.
pub trait Environment {
    /// Value of the environment variable `name`, if set.
    fn var(&self, name: &str) -> Option<OsString>;
    /// Absolute path of the running executable, as reported by the OS.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS cannot resolve the path.
    fn current_exe(&self) -> std::io::Result<PathBuf>;
    /// Real user id of the invoking user.
    fn uid(&self) -> u32;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Runs external executables to completion.
///
/// `argv[0]` names the executable. Both methods block until the child exits
/// and return a normalized exit code: the child's own code when it exited,
/// non-zero when it could not be spawned, was signalled, or was stopped.
pub trait CommandRunner {
    /// Run with inherited stdio.
    fn run(&self, argv: &[String]) -> i32;
    /// Run with stdout/stderr discarded. Used for state queries.
    fn probe(&self, argv: &[String]) -> i32;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Descriptor file operations.
pub trait ServiceFs {
    /// Whether `path` can be stat'ed. Any stat failure reads as absent.
    fn exists(&self, path: &Path) -> bool;
    /// Create the parent directory of `path` (one level, mode 0755) unless it
    /// is already a directory. Never touches `path` itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn ensure_parent_dir(&self, path: &Path) -> Result<()>;
    /// Create or truncate `path` and write all of `content` in one operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the write is short.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Unlink `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    fn remove(&self, path: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
