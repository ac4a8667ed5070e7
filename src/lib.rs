//! # CLI Commons
//!
//! Helpers for writing command-line applications. The centerpiece is the
//! run lifecycle controller in [`entrypoint`]: it runs an application's
//! entrypoint, intercepts returned errors and panics, logs the failure once,
//! and exits the process with a meaningful code.
//!
//! ## Quick Example
//!
//! ```
//! use cli_commons::entrypoint::{App, Cause, Controller, RecordExit};
//! use std::ffi::OsString;
//!
//! let app = App::new("demo", "1.0.0", |_args: Vec<OsString>| {
//!     Err(Cause::with_exit_code(3, anyhow::anyhow!("nothing to do")))
//! });
//!
//! // `RecordExit` returns the exit code instead of terminating the process.
//! let code = Controller::with_terminator(RecordExit).run(app, vec![OsString::from("demo")]);
//! assert_eq!(code, 3);
//! ```
//!
//! ## Modules
//!
//! - **Run lifecycle (`entrypoint`)**: [`entrypoint::run_app`] for `main`,
//!   [`entrypoint::Cause`] for application failures, and a swappable
//!   termination strategy for tests.
//! - **Paths (`files`)**: canonical and relative paths.
//! - **URLs (`url`)**: URL building with query merging, and opening URLs in
//!   the browser.
//! - **Git (`git`)**: force HTTPS remotes and cache HTTPS credentials.
//! - **Commands (`shell`)**: the command runner the git helpers go through.
//! - **Logging (`logging`)**: `env_logger` setup for binaries.

pub mod entrypoint;
pub mod error;
pub mod files;
pub mod git;
pub mod logging;
pub mod shell;
pub mod url;

#[cfg(test)]
mod files_proptest;
