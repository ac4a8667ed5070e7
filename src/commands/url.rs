//! URL commands: `format-url` and `open-url`.

use clap::Args;
use cli_commons::entrypoint::Cause;
use cli_commons::url;

/// Arguments for the format-url command
#[derive(Args, Debug)]
pub struct FormatUrlArgs {
    /// Base URL, e.g. https://example.com/api
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path parts appended to the base URL
    #[arg(value_name = "PART")]
    pub parts: Vec<String>,

    /// Query parameter as key=value; repeat for several values
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Fragment to set on the URL
    #[arg(short, long, value_name = "FRAGMENT", default_value = "")]
    pub fragment: String,
}

/// Arguments for the open-url command
#[derive(Args, Debug)]
pub struct OpenUrlArgs {
    /// URL to open
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Execute the `format-url` command.
pub fn execute_format(args: FormatUrlArgs) -> Result<(), Cause> {
    let query = url::parse_query(&args.query)?;
    println!(
        "{}",
        url::format_url(&args.base, args.parts.as_slice(), &query, &args.fragment)?
    );
    Ok(())
}

/// Execute the `open-url` command.
pub fn execute_open(args: OpenUrlArgs) -> Result<(), Cause> {
    url::open_url(&args.url)?;
    Ok(())
}
