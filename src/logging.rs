//! Logger setup for binaries built on this crate.
//!
//! The library itself only talks to the `log` facade. Binaries call [`init`]
//! once at startup, before the run controller can emit its failure line, and
//! may adjust verbosity later with [`set_level`] once arguments are parsed.
//!
//! `RUST_LOG` always wins: when it is set, its directives decide what is
//! printed and [`set_level`] does nothing.

use std::env;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Verbosity used until the command line says otherwise.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install an `env_logger` writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Trace)
        .format_timestamp(None)
        .parse_env(Env::default());

    if builder.try_init().is_ok() && !rust_log_set() {
        log::set_max_level(DEFAULT_LEVEL);
    }
}

/// Change the maximum level, unless `RUST_LOG` is in control.
pub fn set_level(level: LevelFilter) {
    if !rust_log_set() {
        log::set_max_level(level);
    }
}

fn rust_log_set() -> bool {
    env::var_os("RUST_LOG").is_some_and(|value| !value.is_empty())
}
