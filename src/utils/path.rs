//! Path utilities for configured and command-line database paths.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Resolve a database path given by the user: `~` is expanded and a
/// bare relative name lands in `base` (the config directory).
pub fn resolve_db_path(raw: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(raw);
    if p.is_absolute() { p } else { base.join(p) }
}
