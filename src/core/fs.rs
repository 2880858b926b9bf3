//! Filesystem access — validate the target directory and list its files.
//!
//! The listing is flat: only the immediate children of the directory that
//! are regular files, most recently modified first.

use std::cmp::Reverse;
use std::path::Path;

use crate::error::MdifyError;

use super::entry::FileEntry;

/// Check that `dir` exists and is a directory.
pub fn validate_dir(dir: &Path) -> Result<(), MdifyError> {
    if !dir.exists() {
        return Err(MdifyError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(MdifyError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// List the regular files directly inside `dir`, sorted by modification
/// time (newest first). Ties keep the order `read_dir` produced.
pub fn list_files(dir: &Path) -> anyhow::Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        match FileEntry::from_path(&path) {
            Ok(Some(file)) => files.push(file),
            Ok(None) => {}
            Err(e) => {
                // Dangling symlinks and races with deletion land here.
                tracing::debug!("skipping {}: {e}", path.display());
            }
        }
    }

    // `None` sorts before any `Some`, so files without an mtime go last.
    files.sort_by_key(|f| Reverse(f.modified));

    tracing::debug!("listed {} files in {}", files.len(), dir.display());
    Ok(files)
}
