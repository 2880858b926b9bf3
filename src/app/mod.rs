//! Application orchestration — selection state, the input loop, and the
//! terminal it runs on.

pub mod event;
pub mod handler;
pub mod selector;
pub mod state;
pub mod terminal;
