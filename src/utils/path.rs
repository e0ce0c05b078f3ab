//! Path utilities: expand ~ and resolve paths against a base directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths (after ~ expansion) are kept, relative ones are placed
/// inside `base_dir`.
pub fn resolve_in(base_dir: &Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base_dir.join(p) }
}

/// Resolve a path typed on the command line: relative means relative to
/// the working directory, like any other shell argument.
pub fn from_cwd(path: &str) -> io::Result<PathBuf> {
    Ok(resolve_in(&env::current_dir()?, path))
}
