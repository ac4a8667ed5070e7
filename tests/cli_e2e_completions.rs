//! End-to-end tests for the `cli-commons completions` command.
//!
//! These tests verify the CLI behavior of the `completions` command by invoking
//! the binary directly and checking its output.

mod common;
use common::prelude::*;

#[test]
fn test_completions_help() {
    cli()
        .arg("completions")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate shell completion scripts",
        ))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"))
        .stdout(predicate::str::contains("fish"))
        .stdout(predicate::str::contains("powershell"))
        .stdout(predicate::str::contains("elvish"));
}

#[test]
fn test_completions_bash() {
    cli()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        // Bash completions should contain the completion function
        .stdout(predicate::str::contains("_cli-commons()"))
        // And should reference our subcommands
        .stdout(predicate::str::contains("canonical-path"))
        .stdout(predicate::str::contains("format-url"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_completions_zsh() {
    cli()
        .arg("completions")
        .arg("zsh")
        .assert()
        .success()
        // Zsh completions should start with compdef
        .stdout(predicate::str::contains("#compdef cli-commons"))
        .stdout(predicate::str::contains("relative-path"));
}

#[test]
fn test_completions_fish() {
    cli()
        .arg("completions")
        .arg("fish")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c cli-commons"));
}

#[test]
fn test_completions_invalid_shell() {
    cli()
        .arg("completions")
        .arg("invalid-shell-name")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
