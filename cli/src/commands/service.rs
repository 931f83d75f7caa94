//! `hkd service`: manage the launchd user agent.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::{descriptor, lifecycle};
use crate::domain::supervisor::EXIT_SUCCESS;
use crate::output::json;

/// Service management subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCommand {
    /// Write the launch agent file
    Install,
    /// Remove the launch agent file
    Uninstall,
    /// Load the agent, installing it first if needed
    Start,
    /// Unload the agent
    Stop,
    /// Kill and restart the running agent
    Restart,
    /// Show whether the agent is installed and running
    Status,
    /// Print the launch agent file without installing it
    Print,
}

impl ServiceCommand {
    fn name(self) -> &'static str {
        match self {
            ServiceCommand::Install => "install",
            ServiceCommand::Uninstall => "uninstall",
            ServiceCommand::Start => "start",
            ServiceCommand::Stop => "stop",
            ServiceCommand::Restart => "restart",
            ServiceCommand::Status => "status",
            ServiceCommand::Print => "print",
        }
    }
}

/// Run `hkd service <cmd>`.
///
/// # Errors
///
/// Returns an error if the environment is incomplete or the operation's
/// precondition does not hold. Supervisor and file failures are reported
/// through the returned exit code instead.
pub fn run(app: &AppContext, cmd: ServiceCommand) -> Result<ExitCode> {
    let reporter = app.terminal_reporter();
    let code = match cmd {
        ServiceCommand::Install => lifecycle::install(&app.env, &app.fs, &reporter)?,
        ServiceCommand::Uninstall => lifecycle::uninstall(&app.env, &app.fs, &reporter)?,
        ServiceCommand::Start => lifecycle::start(&app.env, &app.fs, &app.runner, &reporter)?,
        ServiceCommand::Stop => lifecycle::stop(&app.env, &app.fs, &app.runner, &reporter)?,
        ServiceCommand::Restart => {
            lifecycle::restart(&app.env, &app.fs, &app.runner, &reporter)?
        }
        ServiceCommand::Status => return print_status(app),
        ServiceCommand::Print => return print_descriptor(app),
    };
    report(app, cmd, code)?;
    Ok(super::exit_code(code))
}

/// `--json` result of a lifecycle operation.
#[derive(Debug, Serialize)]
struct OperationResult {
    operation: &'static str,
    exit_code: i32,
}

fn report(app: &AppContext, cmd: ServiceCommand, code: i32) -> Result<()> {
    if app.is_json() {
        let result = OperationResult {
            operation: cmd.name(),
            exit_code: code,
        };
        println!("{}", json::format_value(&result)?);
        return Ok(());
    }
    let ctx = &app.output;
    if code != EXIT_SUCCESS {
        ctx.error(&format!(
            "service {} failed (exit status {code}). Re-run with --verbose for details.",
            cmd.name()
        ));
        return Ok(());
    }
    match cmd {
        ServiceCommand::Install => ctx.kv("Start", "hkd service start"),
        ServiceCommand::Start => ctx.success("Service loaded."),
        ServiceCommand::Stop => ctx.success("Service unloaded."),
        ServiceCommand::Restart => ctx.success("Service restarted."),
        ServiceCommand::Uninstall | ServiceCommand::Status | ServiceCommand::Print => {}
    }
    Ok(())
}

fn print_status(app: &AppContext) -> Result<ExitCode> {
    let status = lifecycle::status(&app.env, &app.fs, &app.runner)?;
    if app.is_json() {
        println!("{}", json::format_value(&status)?);
        return Ok(ExitCode::SUCCESS);
    }
    let ctx = &app.output;
    ctx.kv("Label", status.label);
    ctx.kv("Service file", &status.descriptor_path.display().to_string());
    ctx.kv("State", status.state.as_str());
    Ok(ExitCode::SUCCESS)
}

fn print_descriptor(app: &AppContext) -> Result<ExitCode> {
    let content = descriptor::build(&app.env)?;
    print!("{content}");
    Ok(ExitCode::SUCCESS)
}
