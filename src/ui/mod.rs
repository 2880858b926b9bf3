//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No filesystem I/O happens here.

pub mod file_list;
pub mod layout;
pub mod screen;
pub mod theme;
