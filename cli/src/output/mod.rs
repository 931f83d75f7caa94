//! Output formatting module

pub mod json;
pub mod reporter;
pub mod styles;

use std::ffi::OsStr;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let no_color_env = std::env::var_os("NO_COLOR");

        let mut styles = Styles::default();
        if colors_enabled(no_color, is_tty, no_color_env.as_deref()) {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Colors are used on a TTY unless `--no-color` is given or `NO_COLOR` is
/// set to a non-empty value.
fn colors_enabled(no_color_flag: bool, is_tty: bool, no_color_env: Option<&OsStr>) -> bool {
    let env_disables = no_color_env.is_some_and(|v| !v.is_empty());
    is_tty && !no_color_flag && !env_disables
}
