//! Path manipulation utilities for command-line applications

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Return the canonical form of `path`, treating relative paths as relative
/// to `base`.
///
/// A canonical path is absolute and has every `.` and `..` component
/// resolved lexically, which makes it safe to compare paths as strings.
/// Symlinks are not followed. A relative `base` is itself resolved against
/// the current directory.
pub fn canonical_path(path: impl AsRef<Path>, base: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    };

    let absolute = std::path::absolute(&joined).map_err(|e| Error::Path {
        message: format!("cannot make {} absolute: {}", joined.display(), e),
    })?;

    Ok(normalize(&absolute))
}

/// Canonicalize every path in `paths` against `base`, stopping at the first
/// failure.
pub fn canonical_paths<I, P>(paths: I, base: impl AsRef<Path>) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let base = base.as_ref();
    paths
        .into_iter()
        .map(|path| canonical_path(path, base))
        .collect()
}

/// Return the relative path leading from `base` to `path`, using `/` as the
/// separator.
///
/// Both paths must exist: symlinks on either side are resolved before the
/// relative path is computed. An empty path stands for the current
/// directory.
pub fn path_relative_to(path: impl AsRef<Path>, base: impl AsRef<Path>) -> Result<String> {
    let path = resolve(path.as_ref())?;
    let base = resolve(base.as_ref())?;

    let path_components: Vec<Component<'_>> = path.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (e.g. two Windows drives) have no relative path.
    if common == 0 {
        return Err(Error::Path {
            message: format!(
                "{} and {} share no common root",
                path.display(),
                base.display()
            ),
        });
    }

    let mut parts: Vec<String> = Vec::new();
    parts.extend(base_components[common..].iter().map(|_| "..".to_string()));
    parts.extend(
        path_components[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(parts.join("/"))
    }
}

/// Returns true if `path` exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

fn resolve(path: &Path) -> Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    fs::canonicalize(path).map_err(|e| Error::Path {
        message: format!("cannot resolve {}: {}", path.display(), e),
    })
}

/// Lexically resolve `.` and `..` in an absolute path.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if normalized.parent().is_some() {
                    normalized.pop();
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
