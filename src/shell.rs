//! # External Commands
//!
//! A small wrapper around `std::process::Command` used by the `git` and `url`
//! helpers. Callers describe a command with [`ShellCommand`] and execute it
//! through a [`CommandRunner`], which lets tests substitute a fake runner
//! instead of touching the real system.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// A program invocation: program name, arguments and optional stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    stdin: Option<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Feed `input` to the command's standard input.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    pub fn input(&self) -> Option<&str> {
        self.stdin.as_deref()
    }
}

/// Renders the command line. Standard input is never shown, since it may
/// carry credentials.
impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes [`ShellCommand`]s.
pub trait CommandRunner {
    /// Run `command` to completion and return its standard output.
    fn run(&self, command: &ShellCommand) -> Result<String>;
}

/// Options applied to every command a [`SystemRunner`] executes.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Directory to run commands in. Defaults to the current directory.
    pub working_dir: Option<PathBuf>,
    /// Extra environment variables.
    pub env: Vec<(String, String)>,
}

/// Runs commands on the host system.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: ShellOptions,
}

impl SystemRunner {
    pub fn new(options: ShellOptions) -> Self {
        Self { options }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand) -> Result<String> {
        log::debug!("Running command: {}", command);

        let mut process = Command::new(command.program());
        process
            .args(command.arg_list())
            .envs(self.options.env.iter().map(|(k, v)| (k, v)))
            .stdin(if command.input().is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.options.working_dir {
            process.current_dir(dir);
        }

        let command_error = |e: std::io::Error| Error::Command {
            command: command.to_string(),
            stderr: e.to_string(),
        };

        let mut child = process.spawn().map_err(command_error)?;
        if let (Some(input), Some(mut stdin)) = (command.input(), child.stdin.take()) {
            stdin.write_all(input.as_bytes()).map_err(command_error)?;
        }
        let output = child.wait_with_output().map_err(command_error)?;

        if !output.status.success() {
            return Err(Error::Command {
                command: command.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
