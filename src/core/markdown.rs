//! Turn a list of files into one Markdown document of fenced code blocks.

use std::fmt::Write as _;
use std::path::Path;

/// Language tag for the opening fence: the extension without its dot,
/// or an empty string when there is none.
pub fn infer_language(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Fence the contents of a single file.
///
/// Read failures are not fatal: the block is replaced with a one-line
/// `Error reading …` message naming the path and the cause.
pub fn format_file(path: &Path) -> String {
    let language = infer_language(path);
    match std::fs::read_to_string(path) {
        Ok(content) => format!("```{language}\n{content}\n```\n"),
        Err(e) => {
            tracing::warn!("could not read {}: {e}", path.display());
            format!("Error reading {}: {e}\n", path.display())
        }
    }
}

/// Concatenate one block per path, in input order. Each block is headed by
/// `path:` and followed by a blank line.
pub fn format_files<P: AsRef<Path>>(paths: &[P]) -> String {
    let mut out = String::new();
    for path in paths {
        let path = path.as_ref();
        // Writing into a String cannot fail.
        let _ = write!(out, "{}:\n{}\n", path.display(), format_file(path));
    }
    out
}
