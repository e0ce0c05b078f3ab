// src/store/fs_utils.rs

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary sibling used while rewriting `path`.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the whole content of `path` with `bytes`.
///
/// - writes a sibling `.tmp` file, flushes and syncs it
/// - renames it over the target
///
/// If any step fails the target keeps its previous content and the
/// temporary file is removed.
pub(crate) fn write_replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);

    let written = (|| -> io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    written
}
