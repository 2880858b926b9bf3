//! Typed failures that callers branch on.
//!
//! Everything else travels as `anyhow::Error` up to `main`.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MdifyError {
    #[error("Target directory does not exist.")]
    NotFound(PathBuf),

    #[error("The path provided is not a directory.")]
    NotADirectory(PathBuf),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// Ctrl+c in the checklist.  Aborts before anything is copied.
    #[error("interrupted")]
    Interrupted,
}

impl MdifyError {
    /// Usage errors are reported and stop the process without a failure exit.
    pub fn is_usage(&self) -> bool {
        matches!(self, MdifyError::NotFound(_) | MdifyError::NotADirectory(_))
    }

    /// The offending path, for usage errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MdifyError::NotFound(p) | MdifyError::NotADirectory(p) => Some(p),
            MdifyError::Clipboard(_) | MdifyError::Interrupted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_path_errors_are_usage_errors() {
        let missing = MdifyError::NotFound(PathBuf::from("/nope"));
        assert!(missing.is_usage());
        assert_eq!(missing.path(), Some(Path::new("/nope")));
        assert_eq!(missing.to_string(), "Target directory does not exist.");

        let clip = MdifyError::Clipboard("xclip: not found".into());
        assert!(!clip.is_usage());
        assert_eq!(clip.path(), None);
        assert!(!MdifyError::Interrupted.is_usage());
    }
}
