//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `cli-commons` command-line tool. Each subcommand is defined in its own file
//! to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! `execute` returns `Result<(), Cause>`: library errors convert into a
//! generic cause with `?`, and a command that needs a specific exit code
//! builds its cause with `Cause::with_exit_code`.

pub mod completions;
pub mod fail;
pub mod git;
pub mod paths;
pub mod url;
