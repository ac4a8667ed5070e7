//! CLI argument parsing and command dispatch

use clap::{Parser, Subcommand};
use cli_commons::entrypoint::{self, Cause, HELP_TEMPLATE};
use cli_commons::logging;
use log::LevelFilter;
use std::ffi::OsString;

use crate::commands;

/// CLI Commons - helpers for command-line applications
#[derive(Parser, Debug)]
#[command(name = "cli-commons")]
#[command(version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "CLI_COMMONS_LOG"
    )]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical absolute form of one or more paths
    CanonicalPath(commands::paths::CanonicalPathArgs),

    /// Print the relative path from a base directory to a path
    RelativePath(commands::paths::RelativePathArgs),

    /// Build a URL from a base, path parts, query parameters and a fragment
    FormatUrl(commands::url::FormatUrlArgs),

    /// Open a URL in the default browser
    OpenUrl(commands::url::OpenUrlArgs),

    /// Configure git for HTTPS access
    Git(commands::git::GitArgs),

    /// Fail on purpose, to check how a failure is reported
    Fail(commands::fail::FailArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<(), Cause> {
        logging::set_level(self.log_level);

        match self.command {
            Commands::CanonicalPath(args) => commands::paths::execute_canonical(args),
            Commands::RelativePath(args) => commands::paths::execute_relative(args),
            Commands::FormatUrl(args) => commands::url::execute_format(args),
            Commands::OpenUrl(args) => commands::url::execute_open(args),
            Commands::Git(args) => commands::git::execute(args),
            Commands::Fail(args) => commands::fail::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// The application entrypoint handed to the run controller.
pub fn run(args: Vec<OsString>) -> Result<(), Cause> {
    match entrypoint::parse_args::<Cli, _, _>(args)? {
        Some(cli) => cli.execute(),
        None => Ok(()),
    }
}
