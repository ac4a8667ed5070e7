//! # Fail Command Implementation
//!
//! `fail` ends the run on purpose so scripts and tests can check how
//! failures are reported: the log line printed on stderr, the trace shown
//! when `CLI_COMMONS_DEBUG` is set, and the exit code.
//!
//! ```bash
//! cli-commons fail --message "disk full"          # exit 1
//! cli-commons fail --code 42                      # exit 42
//! CLI_COMMONS_DEBUG=1 cli-commons fail --panic    # exit 1, with trace
//! ```

use clap::Args;
use cli_commons::entrypoint::Cause;

/// Arguments for the fail command
#[derive(Args, Debug)]
pub struct FailArgs {
    /// Failure message
    #[arg(short, long, default_value = "requested failure")]
    pub message: String,

    /// Exit code to fail with
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub code: Option<u8>,

    /// Panic instead of returning an error
    #[arg(long, conflicts_with = "code")]
    pub panic: bool,
}

/// Execute the `fail` command.
pub fn execute(args: FailArgs) -> Result<(), Cause> {
    if args.panic {
        panic!("{}", args.message);
    }
    Err(match args.code {
        Some(code) => Cause::with_exit_code(code, anyhow::Error::msg(args.message)),
        None => Cause::msg(args.message),
    })
}
