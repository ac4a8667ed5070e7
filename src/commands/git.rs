//! # Git Command Implementation
//!
//! The `git` subcommand wraps the git configuration helpers:
//!
//! - `git force-https` rewrites SSH remotes on GitHub, GitLab and BitBucket
//!   to HTTPS in the global git configuration.
//! - `git https-auth` stores HTTPS credentials in git's credential cache.
//!
//! ## Example
//!
//! ```bash
//! GIT_OAUTH_TOKEN=... cli-commons git https-auth --username octocat
//! ```

use clap::{Args, Subcommand};
use cli_commons::entrypoint::Cause;
use cli_commons::git;
use cli_commons::shell::SystemRunner;

/// Arguments for the git command
#[derive(Args, Debug)]
pub struct GitArgs {
    #[command(subcommand)]
    pub command: GitCommands,
}

#[derive(Subcommand, Debug)]
pub enum GitCommands {
    /// Use HTTPS instead of SSH for GitHub, GitLab and BitBucket remotes
    ForceHttps,

    /// Cache HTTPS credentials for a git host
    HttpsAuth(HttpsAuthArgs),
}

/// Arguments for the git https-auth command
#[derive(Args, Debug)]
pub struct HttpsAuthArgs {
    /// Git username (defaults to "git")
    #[arg(long, value_name = "NAME", default_value = "")]
    pub username: String,

    /// OAuth token used as the password
    #[arg(long, value_name = "TOKEN", env = "GIT_OAUTH_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Git host to authenticate against
    #[arg(long, value_name = "HOST", default_value = "github.com")]
    pub host: String,
}

/// Execute the `git` command.
pub fn execute(args: GitArgs) -> Result<(), Cause> {
    let runner = SystemRunner::default();
    match args.command {
        GitCommands::ForceHttps => git::configure_force_https(&runner)?,
        GitCommands::HttpsAuth(auth) => {
            git::configure_https_auth(&runner, &auth.username, &auth.token, &auth.host)?
        }
    }
    Ok(())
}
