//! Core logic – directory listing and Markdown formatting.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod entry;
pub mod fs;
pub mod markdown;
