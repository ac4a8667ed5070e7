//! Path commands: `canonical-path` and `relative-path`.

use clap::Args;
use cli_commons::entrypoint::Cause;
use cli_commons::files;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the canonical-path command
#[derive(Args, Debug)]
pub struct CanonicalPathArgs {
    /// Paths to canonicalize
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Directory that relative paths are resolved against (defaults to the current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base: PathBuf,
}

/// Arguments for the relative-path command
#[derive(Args, Debug)]
pub struct RelativePathArgs {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Directory the relative path starts from (defaults to the current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base: PathBuf,
}

/// Execute the `canonical-path` command, printing one path per line.
///
/// Paths are written as their raw bytes, so names that are not valid UTF-8
/// come out the way they went in.
pub fn execute_canonical(args: CanonicalPathArgs) -> Result<(), Cause> {
    let mut stdout = io::stdout().lock();
    for path in files::canonical_paths(&args.paths, &args.base)? {
        stdout.write_all(path.as_os_str().as_encoded_bytes())?;
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Execute the `relative-path` command.
pub fn execute_relative(args: RelativePathArgs) -> Result<(), Cause> {
    println!("{}", files::path_relative_to(&args.path, &args.base)?);
    Ok(())
}
