//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── file list ──────────────────────────────────────────────
    pub fn file_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// Rows whose checkbox is ticked.
    pub fn checked_style() -> Style {
        Style::default().fg(Color::Green)
    }

    /// Row under the cursor.  Patched on top of the file/checked style so
    /// the two stay distinguishable.
    pub fn cursor_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn instructions_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
