//! Integration tests for hkd CLI
//!
//! These tests spawn the actual binary with `HOME` pointed at a temp
//! directory. None of them reach a code path that runs `launchctl load`,
//! `unload` or `kickstart`.

mod cli_tests;
mod service_command;
