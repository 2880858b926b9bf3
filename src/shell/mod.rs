//! Hand-off to the user's environment once the TUI has exited.

pub mod clipboard;
