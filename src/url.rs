//! URL building and browser helpers

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use url::Url;

use crate::error::{Error, Result};
use crate::shell::ShellCommand;

/// Query parameters: each key maps to one or more values.
///
/// Keys are kept sorted, so formatted URLs have a stable query string.
pub type QueryValues = BTreeMap<String, Vec<String>>;

/// Build a URL from a base, path parts, query parameters and a fragment.
///
/// Leading and trailing slashes are stripped from the base and from each
/// path part before the parts are appended to the base path with `/`.
/// `query` is merged into the base URL's own query: a key present in
/// `query` replaces every original value of that key. An empty `fragment`
/// removes any fragment from the base. Everything is percent-encoded.
///
/// ```
/// use cli_commons::url::{format_url, QueryValues};
///
/// let mut query = QueryValues::new();
/// query.insert("tab".to_string(), vec!["files".to_string()]);
///
/// let url = format_url("https://example.com/org/", &["/repo/", "pull"], &query, "top").unwrap();
/// assert_eq!(url, "https://example.com/org/repo/pull?tab=files#top");
/// ```
pub fn format_url<S: AsRef<str>>(
    base: &str,
    path_parts: &[S],
    query: &QueryValues,
    fragment: &str,
) -> Result<String> {
    let mut parsed = Url::parse(strip_slashes(base))?;

    if !path_parts.is_empty() {
        let parts: Vec<&str> = path_parts
            .iter()
            .map(|part| strip_slashes(part.as_ref()))
            .collect();
        let path = format!("{}/{}", strip_slashes(parsed.path()), parts.join("/"));
        parsed.set_path(&path);
    }

    let merged = merge_query(query_values(&parsed), query);
    if merged.is_empty() {
        parsed.set_query(None);
    } else {
        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(
                merged
                    .iter()
                    .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
            );
    }

    parsed.set_fragment(if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    });

    Ok(parsed.to_string())
}

/// Parse `key=value` strings into query values, keeping repeated keys.
pub fn parse_query<I, S>(pairs: I) -> Result<QueryValues>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = QueryValues::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (key, value) = pair.split_once('=').ok_or_else(|| Error::Query {
            pair: pair.to_string(),
        })?;
        values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    Ok(values)
}

/// Merge two sets of query values. Keys in `new` replace keys in `original`.
fn merge_query(mut original: QueryValues, new: &QueryValues) -> QueryValues {
    for (key, values) in new {
        original.insert(key.clone(), values.clone());
    }
    original
}

fn query_values(url: &Url) -> QueryValues {
    let mut values = QueryValues::new();
    for (key, value) in url.query_pairs() {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}

fn strip_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

/// The command that opens `url` in the user's browser on this platform.
pub fn browser_command(url: &str) -> Option<ShellCommand> {
    if cfg!(target_os = "linux") {
        Some(ShellCommand::new("xdg-open").arg(url))
    } else if cfg!(target_os = "windows") {
        Some(ShellCommand::new("rundll32").args(["url.dll,FileProtocolHandler", url]))
    } else if cfg!(target_os = "macos") {
        Some(ShellCommand::new("open").arg(url))
    } else {
        None
    }
}

/// Open `url` in the user's browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    let command = browser_command(url).ok_or_else(|| Error::Unsupported {
        feature: format!("opening URLs on {}", std::env::consts::OS),
    })?;

    log::debug!("Opening {} with: {}", url, command);
    Command::new(command.program())
        .args(command.arg_list())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Command {
            command: command.to_string(),
            stderr: e.to_string(),
        })?;
    Ok(())
}
