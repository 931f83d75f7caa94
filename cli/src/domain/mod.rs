//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::env`.
//! All functions are synchronous and take data in, returning data out.

pub mod descriptor;
pub mod error;
pub mod plist;
pub mod supervisor;

pub use descriptor::{ProcessType, ServiceDescriptor};
pub use error::{ConfigurationError, ServiceError};
pub use supervisor::{LABEL, LAUNCHCTL, ServiceIdentity, ServiceState};
