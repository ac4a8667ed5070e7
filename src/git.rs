//! Git configuration helpers.
//!
//! These functions shell out to the system `git` through a
//! [`CommandRunner`], which automatically picks up the user's global git
//! configuration.

use crate::error::{Error, Result};
use crate::shell::{CommandRunner, ShellCommand};

/// Hosts whose SSH remotes are rewritten to HTTPS.
pub const FORCE_HTTPS_HOSTS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

/// How long the credential cache keeps credentials, in seconds.
pub const CREDENTIAL_CACHE_TIMEOUT_SECS: u32 = 3600;

const DEFAULT_USERNAME: &str = "git";

/// Configure git to use HTTPS instead of SSH remotes for GitHub, GitLab and
/// BitBucket.
///
/// Every rewrite is attempted even if an earlier one fails; all failures are
/// returned together.
pub fn configure_force_https(runner: &dyn CommandRunner) -> Result<()> {
    let errors: Vec<Error> = FORCE_HTTPS_HOSTS
        .iter()
        .flat_map(|host| force_https_commands(host))
        .filter_map(|command| runner.run(&command).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Multiple(errors))
    }
}

fn force_https_commands(host: &str) -> [ShellCommand; 2] {
    [
        git_config_global(
            format!("url.https://{}.insteadOf", host),
            format!("ssh://git@{}", host),
        ),
        git_config_global(
            format!("url.https://{}/.insteadOf", host),
            format!("git@{}:", host),
        ),
    ]
}

fn git_config_global(key: String, value: String) -> ShellCommand {
    ShellCommand::new("git").args(["config".to_string(), "--global".to_string(), key, value])
}

/// Configure git to authenticate against `host` over HTTPS with the given
/// username and OAuth token.
///
/// The credentials go into git's in-memory credential cache (see
/// <https://git-scm.com/book/en/v2/Git-Tools-Credential-Storage>). An empty
/// username defaults to `git`.
pub fn configure_https_auth(
    runner: &dyn CommandRunner,
    username: &str,
    oauth_token: &str,
    host: &str,
) -> Result<()> {
    runner.run(&git_config_global(
        "credential.helper".to_string(),
        format!("cache --timeout {}", CREDENTIAL_CACHE_TIMEOUT_SECS),
    ))?;

    let username = if username.is_empty() {
        DEFAULT_USERNAME
    } else {
        username
    };
    let input = format!(
        "protocol=https\nhost={}\nusername={}\npassword={}\n",
        host, username, oauth_token
    );
    log::debug!("Storing git credentials for {}@{}", username, host);
    runner.run(
        &ShellCommand::new("git")
            .args(["credential-cache", "store"])
            .stdin(input),
    )?;
    Ok(())
}
