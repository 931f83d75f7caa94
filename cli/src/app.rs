//! Application context: unified state passed to every command handler.
//!
//! Holds the output context and the production port implementations, so a
//! command handler never constructs infrastructure itself.

use crate::infra::command_runner::StdCommandRunner;
use crate::infra::env::ProcessEnvironment;
use crate::infra::fs::LocalFs;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Process environment and OS identity.
    pub env: ProcessEnvironment,
    /// Runs `launchctl`.
    pub runner: StdCommandRunner,
    /// Descriptor file access.
    pub fs: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            // JSON mode keeps stdout to the single result document.
            output: OutputContext::new(flags.no_color, flags.quiet || flags.json),
            mode,
            env: ProcessEnvironment,
            runner: StdCommandRunner,
            fs: LocalFs,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Progress reporter bound to this context's output settings.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
