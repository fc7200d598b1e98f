use crate::constants::DEFAULT_TRIES_PATH;
use std::path::{Path, PathBuf};

/// Expand a leading `~` and anchor relative paths at `cwd`.
///
/// Returns `None` when the path starts with `~` but the home directory
/// cannot be determined (e.g. sandboxed environments).
pub fn resolve_path(raw: &str, cwd: &Path) -> Option<PathBuf> {
    let expanded = if raw == "~" {
        dirs::home_dir()?
    } else if let Some(rest) = raw.strip_prefix("~/") {
        dirs::home_dir()?.join(rest)
    } else {
        PathBuf::from(raw)
    };
    if expanded.is_absolute() {
        Some(expanded)
    } else {
        Some(cwd.join(expanded))
    }
}

/// Pick the tries directory: command line, then environment, then config, then the default.
pub fn tries_base_path(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
    cwd: &Path,
) -> Option<PathBuf> {
    let raw = [cli, env, config]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_TRIES_PATH);
    resolve_path(raw, cwd)
}
