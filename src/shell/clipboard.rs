//! Copy text to the system clipboard by piping it into a platform tool.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::MdifyError;

/// Candidate commands, tried in order until one succeeds.
#[cfg(target_os = "macos")]
const CLIP_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIP_COMMANDS: &[(&str, &[&str])] = &[("cmd", &["/C", "clip"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIP_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), MdifyError> {
    let mut failures = Vec::new();

    for &(cmd, args) in CLIP_COMMANDS {
        match run_clip_command(cmd, args, text) {
            Ok(()) => {
                tracing::debug!("copied {} bytes via {cmd}", text.len());
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("{cmd} failed: {e}");
                failures.push(format!("{cmd}: {e}"));
            }
        }
    }

    Err(MdifyError::Clipboard(failures.join("; ")))
}

fn run_clip_command(cmd: &str, args: &[&str], input: &str) -> std::io::Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
        // Dropping stdin closes the pipe so the tool sees EOF.
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}
