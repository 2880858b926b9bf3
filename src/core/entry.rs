//! Snapshot of a single file taken when the selector starts.
//!
//! Entries are never refreshed during a session; if the file changes or
//! disappears afterwards the formatter reports it instead.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Lightweight metadata we keep per listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name; lossy for names that are not valid UTF-8.
    pub name: String,
    /// Real path on disk, used for reading.
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    /// Stat `path` (following symlinks). Returns `Ok(None)` for anything
    /// that is not a regular file.
    pub fn from_path(path: &Path) -> std::io::Result<Option<Self>> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Ok(None);
        }
        Ok(Some(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            size: meta.len(),
            modified: meta.modified().ok(),
        }))
    }

    /// Modification time as `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn modified_label(&self) -> String {
        match self.modified {
            Some(ts) => {
                let local: DateTime<Local> = ts.into();
                local.format("%Y-%m-%d %H:%M:%S").to_string()
            }
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
impl FileEntry {
    /// Entry that does not exist on disk, for state and rendering tests.
    pub fn fake(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(name),
            size,
            modified: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    #[test]
    fn from_path_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(FileEntry::from_path(tmp.path()).unwrap(), None);
    }

    #[test]
    fn from_path_captures_name_and_size() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "12345").unwrap();

        let entry = FileEntry::from_path(&path).unwrap().unwrap();
        assert_eq!(entry.name, "notes.txt");
        assert_eq!(entry.path, path);
        assert_eq!(entry.size, 5);
        assert!(entry.modified.is_some());
    }

    #[test]
    fn modified_label_uses_local_time() {
        let secs = 1_700_000_000;
        let entry = FileEntry {
            modified: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs)),
            ..FileEntry::fake("a", 0)
        };
        let expected = Local
            .timestamp_opt(secs as i64, 0)
            .single()
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(entry.modified_label(), expected);
    }

    #[test]
    fn modified_label_without_mtime() {
        let entry = FileEntry::fake("a", 0);
        assert_eq!(entry.modified_label(), "-");
    }
}
