//! # Error Handling
//!
//! This module defines the error type returned by the helper modules of
//! `cli-commons` (`files`, `url`, `shell` and `git`). It uses `thiserror` to
//! derive readable messages for each failure mode.
//!
//! Application-level failures that reach the run controller are represented
//! by [`crate::entrypoint::Cause`] instead; any value of this `Error` type
//! converts into a `Cause` with `?`.

use thiserror::Error;

/// Main error type for cli-commons helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A path could not be canonicalized or related to another path.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A query parameter was not written as `key=value`.
    #[error("Invalid query parameter '{pair}': expected key=value")]
    Query { pair: String },

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("Command failed: {command} - {stderr}")]
    Command { command: String, stderr: String },

    /// The operation is not available on this platform.
    #[error("Unsupported: {feature}")]
    Unsupported { feature: String },

    /// Several independent steps failed; all of them are reported.
    #[error("{} errors occurred:{}", .0.len(), .0.iter().map(|e| format!("\n  * {}", e)).collect::<String>())]
    Multiple(Vec<Error>),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
