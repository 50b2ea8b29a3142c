//! Path resolution utilities.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~` are returned unchanged.
///
/// # Example
///
/// ```
/// use tagloom_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/blog");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Resolve `path` against `base` unless it is already absolute.
///
/// A leading `~` is expanded first.
pub fn resolve_against(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// Per-user config file location for `app`: `<config dir>/<app>/config.toml`.
pub fn user_config_file(app: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(app).join("config.toml"))
}
