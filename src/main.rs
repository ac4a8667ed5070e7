//! # CLI Commons
//!
//! This is the binary entry point for the `cli-commons` command-line tool.
//!
//! Its primary responsibilities are:
//! - Installing the logger before anything can fail.
//! - Handing the command-line entrypoint to the run controller, which parses
//!   arguments, dispatches the subcommand, reports failures and picks the
//!   exit code.
//!
//! The helpers themselves live in the `cli_commons` library crate; the
//! binary is a thin wrapper around them.

mod cli;
mod commands;

use cli_commons::entrypoint::{self, App};
use cli_commons::logging;

fn main() {
    logging::init();
    let app = App::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), cli::run);
    entrypoint::run_app(app)
}
