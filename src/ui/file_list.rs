//! Checklist widget: one row per file with checkbox, name, size and mtime.
//!
//! The viewport never scrolls.  Rows past the bottom of the area are simply
//! not drawn, even when the cursor is on one of them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::config::DEFAULT_NAME_WIDTH;
use crate::core::entry::FileEntry;

use super::theme::Theme;

/// Created fresh each frame from the selector's state.
pub struct FileListWidget<'a> {
    entries: &'a [FileEntry],
    flags: &'a [bool],
    cursor: usize,
    name_width: usize,
}

impl<'a> FileListWidget<'a> {
    pub fn new(entries: &'a [FileEntry], flags: &'a [bool], cursor: usize) -> Self {
        Self {
            entries,
            flags,
            cursor,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }

    pub fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Plain text of a single row.
    pub fn row_text(&self, entry: &FileEntry, checked: bool) -> String {
        let checkbox = if checked { "[X]" } else { "[ ]" };
        format!(
            "{checkbox} {name:<width$} {size:>10} bytes  {mtime}",
            name = entry.name,
            width = self.name_width,
            size = entry.size,
            mtime = entry.modified_label(),
        )
    }
}

impl Widget for FileListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            let line = Line::from(Span::styled("(no files)", Theme::placeholder_style()));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let visible = self.entries.iter().enumerate().take(area.height as usize);

        for (i, entry) in visible {
            let y = area.y + i as u16;
            let checked = self.flags.get(i).copied().unwrap_or(false);

            let mut style = if checked {
                Theme::checked_style()
            } else {
                Theme::file_style()
            };
            if i == self.cursor {
                style = style.patch(Theme::cursor_style());
            }

            let line = Line::from(Span::styled(self.row_text(entry, checked), style));
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    fn entry(name: &str, size: u64) -> FileEntry {
        FileEntry::fake(name, size)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn row_text_pads_name_and_size() {
        let entries = [entry("main.rs", 1234)];
        let widget = FileListWidget::new(&entries, &[false], 0);
        assert_eq!(
            widget.row_text(&entries[0], false),
            format!("[ ] {:<30} {:>10} bytes  -", "main.rs", 1234)
        );
        assert!(widget.row_text(&entries[0], true).starts_with("[X] main.rs"));
    }

    #[test]
    fn custom_name_width() {
        let entries = [entry("a", 1)];
        let widget = FileListWidget::new(&entries, &[false], 0).name_width(3);
        assert_eq!(widget.row_text(&entries[0], false), "[ ] a            1 bytes  -");
    }

    #[test]
    fn renders_only_rows_that_fit() {
        let entries = [entry("a", 1), entry("b", 2), entry("c", 3)];
        let flags = [false, true, false];
        let area = Rect::new(0, 0, 70, 2);
        let mut buf = Buffer::empty(area);

        FileListWidget::new(&entries, &flags, 2).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("[ ] a"));
        assert!(row(&buf, 1).starts_with("[X] b"));
    }

    #[test]
    fn cursor_and_checked_styles_compose() {
        let entries = [entry("a", 1), entry("b", 2)];
        let flags = [true, true];
        let area = Rect::new(0, 0, 70, 2);
        let mut buf = Buffer::empty(area);

        FileListWidget::new(&entries, &flags, 0).render(area, &mut buf);

        let highlighted = &buf[(0, 0)];
        assert_eq!(highlighted.fg, Color::Green);
        assert_eq!(highlighted.bg, Color::DarkGray);
        assert!(highlighted.modifier.contains(Modifier::BOLD));

        let plain = &buf[(0, 1)];
        assert_eq!(plain.fg, Color::Green);
        assert_ne!(plain.bg, Color::DarkGray);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        FileListWidget::new(&[], &[], 0).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "(no files)");
        assert_eq!(row(&buf, 1), "");
    }
}
