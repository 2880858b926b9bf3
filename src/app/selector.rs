//! The interactive selection loop.
//!
//! Drawing and reading input go through [`SelectorIo`] so the loop can be
//! driven by a real terminal or by a scripted sequence of inputs.

use crate::core::entry::FileEntry;

use super::event::InputEvent;
use super::handler::handle_input;
use super::state::SelectorState;

/// Everything the loop needs from the outside world.
pub trait SelectorIo {
    /// Redraw the whole screen.
    fn render_frame(&mut self, entries: &[FileEntry], flags: &[bool], cursor: usize)
        -> anyhow::Result<()>;

    /// Block until the next input arrives.
    fn read_next_input(&mut self) -> anyhow::Result<InputEvent>;
}

/// Run the loop until the user confirms or cancels.
///
/// Returns the confirmed entries, or an empty list on cancel.  Errors from
/// `io` are not recovered.
pub fn run<I: SelectorIo>(io: &mut I, entries: Vec<FileEntry>) -> anyhow::Result<Vec<FileEntry>> {
    let mut state = SelectorState::new(entries);

    while !state.outcome().is_terminal() {
        io.render_frame(state.entries(), state.flags(), state.cursor())?;
        let input = io.read_next_input()?;
        tracing::trace!(?input, cursor = state.cursor(), "selector input");
        handle_input(&mut state, input);
    }

    let result = state.result();
    tracing::debug!(
        outcome = ?state.outcome(),
        selected = result.len(),
        "selector finished"
    );
    Ok(result)
}
