//! The error value that reaches the run controller.
//!
//! A [`Cause`] is a thin wrapper around a [`Failure`]. The wrapper owns the
//! diagnostic trace and the origin marker, while the failure holds the
//! underlying error and, optionally, an application-chosen exit code. The
//! controller looks at both layers: exit codes and plain messages come from
//! the unwrapped failure, the trace comes from the wrapper.

use std::backtrace::Backtrace;
use std::fmt;
use std::num::NonZeroU8;

/// The underlying error of a [`Cause`].
#[derive(Debug)]
pub enum Failure {
    /// An error without an attached exit code.
    Generic(anyhow::Error),
    /// An error that asks for a specific process exit code.
    Coded {
        code: NonZeroU8,
        error: anyhow::Error,
    },
}

impl Failure {
    /// The custom exit code, if this failure carries one.
    pub fn exit_code(&self) -> Option<NonZeroU8> {
        match self {
            Failure::Generic(_) => None,
            Failure::Coded { code, .. } => Some(*code),
        }
    }

    /// The wrapped error.
    pub fn error(&self) -> &anyhow::Error {
        match self {
            Failure::Generic(error) | Failure::Coded { error, .. } => error,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate formatting renders the whole context chain on one line.
        write!(f, "{:#}", self.error())
    }
}

/// Where a [`Cause`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The application returned the error from its entrypoint.
    Returned,
    /// The application panicked and the panic was intercepted.
    Fault,
}

/// An application failure: message, diagnostic trace and optional exit code.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a generic
/// `Cause`, so entrypoints can use `?` on library results directly:
///
/// ```
/// use cli_commons::entrypoint::Cause;
///
/// fn read_config(path: &str) -> Result<String, Cause> {
///     Ok(std::fs::read_to_string(path)?)
/// }
///
/// let cause = read_config("/definitely/not/here").unwrap_err();
/// assert_eq!(cause.exit_code(), 1);
///
/// let coded = Cause::with_exit_code(42, anyhow::anyhow!("quota exceeded"));
/// assert_eq!(coded.exit_code(), 42);
/// ```
#[derive(Debug)]
pub struct Cause {
    failure: Failure,
    trace: String,
    origin: Origin,
}

impl Cause {
    /// Wrap an error as a generic failure, capturing a trace at this point.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self::wrap(Failure::Generic(error.into()))
    }

    /// Wrap a plain message as a generic failure.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(anyhow::Error::msg(message))
    }

    /// Wrap an error together with the exit code the process should use.
    ///
    /// Zero is not a failure code; a zero request degrades to a generic
    /// failure that exits with the default error code.
    pub fn with_exit_code(code: u8, error: impl Into<anyhow::Error>) -> Self {
        let error = error.into();
        match NonZeroU8::new(code) {
            Some(code) => Self::wrap(Failure::Coded { code, error }),
            None => {
                log::debug!("exit code 0 requested for a failure, using the default error code");
                Self::wrap(Failure::Generic(error))
            }
        }
    }

    fn wrap(failure: Failure) -> Self {
        Self {
            failure,
            trace: Backtrace::force_capture().to_string(),
            origin: Origin::Returned,
        }
    }

    /// Build the cause for an intercepted panic.
    pub(crate) fn fault(message: String, trace: String) -> Self {
        Self {
            failure: Failure::Generic(anyhow::Error::msg(message)),
            trace,
            origin: Origin::Fault,
        }
    }

    /// The underlying failure, without the trace-carrying wrapper.
    pub fn unwrap_failure(&self) -> &Failure {
        &self.failure
    }

    pub fn into_failure(self) -> Failure {
        self.failure
    }

    /// The diagnostic trace attached when this cause was created.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_fault(&self) -> bool {
        self.origin == Origin::Fault
    }

    /// The process exit code this cause maps to.
    pub fn exit_code(&self) -> i32 {
        self.failure
            .exit_code()
            .map_or(super::DEFAULT_ERROR_EXIT_CODE, |code| i32::from(code.get()))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.failure, f)
    }
}

impl<E> From<E> for Cause
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_generic_cause_uses_default_error_code() {
        let cause = Cause::msg("disk full");
        assert_eq!(cause.exit_code(), 1);
        assert_eq!(cause.origin(), Origin::Returned);
        assert!(cause.unwrap_failure().exit_code().is_none());
        assert_eq!(cause.to_string(), "disk full");
    }

    #[test]
    fn test_coded_cause_exposes_its_code() {
        let cause = Cause::with_exit_code(42, anyhow::anyhow!("quota exceeded"));
        assert_eq!(cause.exit_code(), 42);
        assert_eq!(
            cause.unwrap_failure().exit_code(),
            Some(NonZeroU8::new(42).unwrap())
        );
        assert_eq!(cause.to_string(), "quota exceeded");
    }

    #[test]
    fn test_coded_cause_accepts_max_code() {
        let cause = Cause::with_exit_code(255, anyhow::anyhow!("boom"));
        assert_eq!(cause.exit_code(), 255);
    }

    #[test]
    fn test_zero_exit_code_degrades_to_generic() {
        let cause = Cause::with_exit_code(0, anyhow::anyhow!("not really a success"));
        assert!(matches!(cause.unwrap_failure(), Failure::Generic(_)));
        assert_eq!(cause.exit_code(), 1);
    }

    #[test]
    fn test_std_errors_convert_with_question_mark() {
        fn fails() -> Result<(), Cause> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "access denied",
            ))?;
            Ok(())
        }

        let cause = fails().unwrap_err();
        assert_eq!(cause.exit_code(), 1);
        assert!(cause.to_string().contains("access denied"));
    }

    #[test]
    fn test_library_error_converts_into_cause() {
        let error = crate::error::Error::Path {
            message: "bad base".to_string(),
        };
        let cause: Cause = error.into();
        assert_eq!(cause.to_string(), "Path operation error: bad base");
    }

    #[test]
    fn test_message_includes_context_chain() {
        let error = std::fs::read("/definitely/not/here")
            .context("loading settings")
            .unwrap_err();
        let cause = Cause::new(error);
        let message = cause.to_string();
        assert!(message.starts_with("loading settings: "));
    }

    #[test]
    fn test_trace_is_attached_to_the_wrapper() {
        let cause = Cause::msg("with trace");
        // The trace lives on the cause, never inside the failure's message.
        assert!(!cause.unwrap_failure().to_string().contains(cause.trace()));
    }

    #[test]
    fn test_fault_cause_is_marked() {
        let cause = Cause::fault("boom".to_string(), "panicked at src/lib.rs:1:1".to_string());
        assert!(cause.is_fault());
        assert_eq!(cause.origin(), Origin::Fault);
        assert_eq!(cause.exit_code(), 1);
        assert_eq!(cause.trace(), "panicked at src/lib.rs:1:1");
    }

    #[test]
    fn test_into_failure_keeps_the_code() {
        let failure = Cause::with_exit_code(7, anyhow::anyhow!("seven")).into_failure();
        assert_eq!(failure.exit_code().map(NonZeroU8::get), Some(7));
        assert_eq!(failure.error().to_string(), "seven");
    }
}
