//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `StdCommandRunner` spawns with `std::process` and blocks until the child
//! terminates. There is no timeout: the caller is a one-shot CLI invocation
//! whose own lifetime bounds the wait.

use std::io::ErrorKind;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::application::ports::CommandRunner;
use crate::domain::supervisor::EXIT_FAILURE;

/// Production `CommandRunner`. Children inherit the caller's environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdCommandRunner;

impl StdCommandRunner {
    fn execute(argv: &[String], silent: bool) -> i32 {
        let Some((program, args)) = argv.split_first() else {
            warn!("refusing to run an empty argument vector");
            return EXIT_FAILURE;
        };
        debug!(?argv, "spawning");

        let mut command = Command::new(program);
        command.args(args);
        if silent {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(error) => {
                warn!(%program, %error, "failed to spawn");
                return EXIT_FAILURE;
            }
        };

        match wait_uninterrupted(child) {
            Ok(status) => normalize_exit(status),
            Err(error) => {
                warn!(%program, %error, "failed to wait for child");
                EXIT_FAILURE
            }
        }
    }
}

impl CommandRunner for StdCommandRunner {
    fn run(&self, argv: &[String]) -> i32 {
        Self::execute(argv, false)
    }

    fn probe(&self, argv: &[String]) -> i32 {
        Self::execute(argv, true)
    }
}

/// Wait for `child`, retrying when a signal interrupts the wait.
fn wait_uninterrupted(mut child: Child) -> std::io::Result<ExitStatus> {
    loop {
        match child.wait() {
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            result => return result,
        }
    }
}

/// Map a child's status to an exit code. Termination by signal and stops are
/// failures; the signal number is not propagated.
#[must_use]
pub fn normalize_exit(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal().or_else(|| status.stopped_signal()) {
            debug!(signal, "child terminated by signal");
            return EXIT_FAILURE;
        }
    }
    status.code().unwrap_or(EXIT_FAILURE)
}
