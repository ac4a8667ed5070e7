//! `completions`: print a shell completion script for `cli-commons`.
//!
//! The script is generated from the same `Cli` definition the binary parses
//! with, so it covers every subcommand and the global `--log-level` flag.
//!
//! ```bash
//! cli-commons completions bash > ~/.local/share/bash-completion/completions/cli-commons
//! ```

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use cli_commons::entrypoint::Cause;
use std::io::{self, Write};

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate the script for (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> Result<(), Cause> {
    let mut cmd = crate::cli::Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut stdout = io::stdout().lock();
    generate(args.shell, &mut cmd, bin_name, &mut stdout);
    stdout.flush()?;
    Ok(())
}
