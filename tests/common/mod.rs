//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     cli().arg("--help").assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::cli;
    #[allow(unused_imports)]
    pub use super::DEBUG_ENV_VAR;
}

/// Name of the environment variable that enables trace output.
pub const DEBUG_ENV_VAR: &str = "CLI_COMMONS_DEBUG";

/// A `cli-commons` command with a predictable logging environment.
///
/// `RUST_LOG`, `CLI_COMMONS_LOG` and the debug flag are removed so that the
/// developer's shell settings cannot change what the tests observe.
pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("cli-commons");
    cmd.env_remove("RUST_LOG")
        .env_remove("CLI_COMMONS_LOG")
        .env_remove(DEBUG_ENV_VAR);
    cmd
}
