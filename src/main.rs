//! Pick files from a directory in a terminal checklist and copy their
//! contents to the clipboard as Markdown code blocks.
//!
//! Run with a directory argument to open the checklist.  Set `RUST_LOG` to
//! get debug output on stderr.

mod app;
mod config;
mod core;
mod error;
mod shell;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::{selector, terminal::TuiIo};
use crate::config::AppConfig;
use crate::error::MdifyError;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "Select files and copy them to the clipboard as Markdown"
)]
struct Cli {
    /// Directory whose files are offered for selection.
    path: Option<PathBuf>,

    /// Write the Markdown to stdout instead of the clipboard.
    #[arg(long)]
    print: bool,

    /// Read settings from this file instead of the default config path.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let Some(dir) = cli.path else {
        println!("Usage: {} <target-directory>", env!("CARGO_PKG_NAME"));
        return Ok(());
    };

    // ── usage errors stop here without a failure exit ───────────
    if let Err(e) = crate::core::fs::validate_dir(&dir) {
        if e.is_usage() {
            tracing::debug!("rejected target {:?}", e.path());
            println!("Error: {e}");
            return Ok(());
        }
        return Err(e.into());
    }

    let entries = crate::core::fs::list_files(&dir)?;
    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // ── interactive selection ─────────────────────────────────
    // `TuiIo` restores the terminal when it goes out of scope.
    let outcome = {
        let mut io = TuiIo::new(&dir, config)?;
        selector::run(&mut io, entries)
    };
    let selected = match outcome {
        Err(e) if matches!(e.downcast_ref::<MdifyError>(), Some(MdifyError::Interrupted)) => {
            tracing::info!("interrupted; clipboard left untouched");
            std::process::exit(130);
        }
        other => other?,
    };
    tracing::info!("{} file(s) selected", selected.len());

    // ── format & hand off ─────────────────────────────────────
    let paths: Vec<PathBuf> = selected.into_iter().map(|entry| entry.path).collect();
    let markdown = crate::core::markdown::format_files(&paths);

    if cli.print {
        print!("{markdown}");
        return Ok(());
    }

    shell::clipboard::copy_to_clipboard(&markdown)?;
    println!("Markdown copied to clipboard.");

    Ok(())
}
