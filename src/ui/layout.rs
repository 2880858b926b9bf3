//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Instruction line on top, a spacer, the file list, and a status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // instructions
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // file list (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            list_area: chunks[2],
            status_area: chunks[3],
        }
    }
}
