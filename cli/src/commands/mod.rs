//! Command implementations

pub mod service;
pub mod version;

use std::process::ExitCode;

/// Process exit code for an operation result. Zero is success; anything that
/// does not fit a `u8` exit status collapses to a generic failure.
#[must_use]
pub fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(c) => ExitCode::from(c),
        Err(_) => ExitCode::FAILURE,
    }
}
