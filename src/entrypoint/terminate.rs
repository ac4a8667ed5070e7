//! Termination strategies for the run controller.

use std::convert::Infallible;

/// The final action a [`Controller`](super::Controller) takes once the exit
/// code is known.
///
/// The strategy is consumed by value, so a controller can terminate at most
/// once.
pub trait Terminate {
    /// What `terminate` hands back. [`ProcessExit`] never returns, which it
    /// expresses as [`Infallible`].
    type Output;

    fn terminate(self, code: i32) -> Self::Output;
}

/// Exit the process with the computed code.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    type Output = Infallible;

    fn terminate(self, code: i32) -> Infallible {
        std::process::exit(code)
    }
}

/// Hand the exit code back to the caller instead of exiting.
///
/// Used by tests to observe classification without killing the test process.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordExit;

impl Terminate for RecordExit {
    type Output = i32;

    fn terminate(self, code: i32) -> i32 {
        code
    }
}
