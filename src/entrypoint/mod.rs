//! # Application Run Lifecycle
//!
//! This module wraps the `main` of a command-line application. It runs the
//! application's entrypoint, intercepts both returned errors and panics,
//! logs the failure once, and terminates the process with an exit code that
//! tells calling scripts what happened.
//!
//! ## Flow
//!
//! 1.  [`Controller::run`] calls the entrypoint with the argument list inside
//!     a panic boundary ([`fault::intercept`]).
//! 2.  The result becomes an [`Outcome`]: `Succeeded`, `ErrorReturned` or
//!     `FaultIntercepted`.
//! 3.  [`Controller::check_for_errors_and_exit`] logs the cause (if any),
//!     computes the exit code and hands it to the controller's [`Terminate`]
//!     strategy.
//!
//! ## Exit Codes
//!
//! - `0`: the entrypoint returned `Ok(())`.
//! - `1`: the entrypoint returned a generic [`Cause`] or panicked.
//! - `N`: the entrypoint returned a cause built with [`Cause::with_exit_code`].
//!
//! ## Debug Mode
//!
//! When the environment variable named by [`DEBUG_ENV_VAR`] holds any
//! non-empty value, the error log line also carries the diagnostic trace
//! attached to the cause. Otherwise only the message is logged.
//!
//! ## Example
//!
//! ```no_run
//! use cli_commons::entrypoint::{self, App, Cause};
//! use std::ffi::OsString;
//!
//! fn main() {
//!     let app = App::new("greeter", "1.0.0", |args: Vec<OsString>| {
//!         let name = args.get(1).ok_or_else(|| Cause::with_exit_code(2, anyhow::anyhow!("missing name")))?;
//!         println!("hello, {}", name.to_string_lossy());
//!         Ok(())
//!     });
//!     entrypoint::run_app(app)
//! }
//! ```

mod cause;
pub mod fault;
mod terminate;

pub use cause::{Cause, Failure, Origin};
pub use terminate::{ProcessExit, RecordExit, Terminate};

use std::borrow::Cow;
use std::env;
use std::ffi::OsString;
use std::fmt;

pub const DEFAULT_SUCCESS_EXIT_CODE: i32 = 0;
pub const DEFAULT_ERROR_EXIT_CODE: i32 = 1;

/// Environment variable that turns on trace output in failure logs.
pub const DEBUG_ENV_VAR: &str = "CLI_COMMONS_DEBUG";

/// Help layout shared by applications built on this crate.
///
/// [`App::command`] applies it to builder-API commands. With clap's derive
/// API use `#[command(help_template = HELP_TEMPLATE)]`.
pub const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

/// A command-line application: its identity and its entrypoint.
///
/// The entrypoint receives the raw process arguments, program name first.
pub struct App<F> {
    name: String,
    version: String,
    entrypoint: F,
}

impl<F> App<F>
where
    F: FnOnce(Vec<OsString>) -> Result<(), Cause>,
{
    pub fn new(name: impl Into<String>, version: impl Into<String>, entrypoint: F) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            entrypoint,
        }
    }
}

impl<F> App<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// A `clap::Command` carrying the application's name, version and
    /// [`HELP_TEMPLATE`], for applications built with clap's builder API.
    pub fn command(&self) -> clap::Command {
        clap::Command::new(self.name.clone())
            .version(self.version.clone())
            .help_template(HELP_TEMPLATE)
    }

    /// The identity failure logs are emitted under.
    pub fn logger_id(&self) -> LoggerId {
        LoggerId::new(&self.name, &self.version)
    }
}

/// Logger identity: application name and version.
///
/// Failure logs use `"{name}@{version}"` as their `log` target, so an
/// `env_logger` filter on the application name still matches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerId {
    target: String,
}

impl LoggerId {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            target: format!("{}@{}", name, version),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for LoggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target)
    }
}

/// How a single application run ended.
#[derive(Debug)]
pub enum Outcome {
    Succeeded,
    ErrorReturned(Cause),
    FaultIntercepted(Cause),
}

impl Outcome {
    /// The failure cause, if the run did not succeed.
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Outcome::Succeeded => None,
            Outcome::ErrorReturned(cause) | Outcome::FaultIntercepted(cause) => Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

impl From<Result<(), Cause>> for Outcome {
    fn from(result: Result<(), Cause>) -> Self {
        match result {
            Ok(()) => Outcome::Succeeded,
            Err(cause) if cause.is_fault() => Outcome::FaultIntercepted(cause),
            Err(cause) => Outcome::ErrorReturned(cause),
        }
    }
}

/// Runs an [`App`] and terminates the process according to its outcome.
///
/// The termination strategy is fixed at construction. Production code uses
/// [`ProcessExit`]; tests swap in [`RecordExit`] to observe the exit code.
#[derive(Debug)]
pub struct Controller<T = ProcessExit> {
    terminator: T,
    debug_var: Cow<'static, str>,
}

impl Controller<ProcessExit> {
    pub fn new() -> Self {
        Self::with_terminator(ProcessExit)
    }
}

impl Default for Controller<ProcessExit> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Terminate> Controller<T> {
    pub fn with_terminator(terminator: T) -> Self {
        Self {
            terminator,
            debug_var: Cow::Borrowed(DEBUG_ENV_VAR),
        }
    }

    /// Read the debug flag from a different environment variable.
    pub fn debug_env_var(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.debug_var = name.into();
        self
    }

    /// Whether the debug environment variable is set to a non-empty value.
    pub fn debug_enabled(&self) -> bool {
        env::var_os(&*self.debug_var).is_some_and(|value| !value.is_empty())
    }

    /// Run the application's entrypoint with `args`, then classify and exit.
    ///
    /// A panic inside the entrypoint is intercepted and classified like a
    /// returned error. Panics raised while logging or exiting are not.
    pub fn run<F>(self, app: App<F>, args: Vec<OsString>) -> T::Output
    where
        F: FnOnce(Vec<OsString>) -> Result<(), Cause>,
    {
        let logger = app.logger_id();
        let entrypoint = app.entrypoint;

        let outcome = match fault::intercept(move || entrypoint(args)) {
            Ok(Ok(())) => Outcome::Succeeded,
            Ok(Err(cause)) => Outcome::ErrorReturned(cause),
            Err(cause) => Outcome::FaultIntercepted(cause),
        };

        self.check_for_errors_and_exit(&logger, outcome)
    }

    /// Log the outcome's cause, if any, and terminate with its exit code.
    pub fn check_for_errors_and_exit(self, logger: &LoggerId, outcome: Outcome) -> T::Output {
        if let Some(cause) = outcome.cause() {
            log_error(logger, cause, self.debug_enabled());
        }
        let code = exit_code(&outcome);
        self.terminator.terminate(code)
    }
}

/// Run `app` with the process arguments and exit the process.
pub fn run_app<F>(app: App<F>) -> !
where
    F: FnOnce(Vec<OsString>) -> Result<(), Cause>,
{
    let args = env::args_os().collect();
    match Controller::new().run(app, args) {}
}

/// Emit the single error-level log line for a failed run.
///
/// In debug mode the line carries the cause's trace after the message.
pub fn log_error(logger: &LoggerId, cause: &Cause, debug: bool) {
    let failure = cause.unwrap_failure();
    if debug {
        log::error!(target: logger.target(), "{}\n{}", failure, cause.trace());
    } else {
        log::error!(target: logger.target(), "{}", failure);
    }
}

/// The process exit code for an outcome.
pub fn exit_code(outcome: &Outcome) -> i32 {
    match outcome.cause() {
        None => DEFAULT_SUCCESS_EXIT_CODE,
        Some(cause) => cause
            .unwrap_failure()
            .exit_code()
            .map_or(DEFAULT_ERROR_EXIT_CODE, |code| i32::from(code.get())),
    }
}

/// Parse `args` with clap without letting clap exit the process.
///
/// Returns `Ok(None)` when clap printed help or version output, and a cause
/// carrying clap's exit code for usage errors.
pub fn parse_args<P, I, A>(args: I) -> Result<Option<P>, Cause>
where
    P: clap::Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) if !err.use_stderr() => {
            err.print()?;
            Ok(None)
        }
        Err(err) => {
            let code = u8::try_from(err.exit_code()).unwrap_or(2);
            Err(Cause::with_exit_code(code, err))
        }
    }
}
