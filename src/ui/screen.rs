//! Full-screen frame: instructions, file list and status bar.

use std::path::Path;

use ratatui::{widgets::Paragraph, Frame};

use crate::config::AppConfig;
use crate::core::entry::FileEntry;

use super::{file_list::FileListWidget, layout::AppLayout, theme::Theme};

/// Everything a single frame shows.
pub struct ScreenView<'a> {
    pub dir: &'a Path,
    pub config: &'a AppConfig,
    pub entries: &'a [FileEntry],
    pub flags: &'a [bool],
    pub cursor: usize,
}

pub fn draw(frame: &mut Frame, view: &ScreenView) {
    let layout = AppLayout::from_area(frame.area());

    let header = Paragraph::new(view.config.instructions()).style(Theme::instructions_style());
    frame.render_widget(header, layout.header_area);

    let list = FileListWidget::new(view.entries, view.flags, view.cursor)
        .name_width(view.config.name_width);
    frame.render_widget(list, layout.list_area);

    let selected = view.flags.iter().filter(|&&f| f).count();
    let status = format!(
        " {selected}/{} selected | {}",
        view.entries.len(),
        view.dir.display()
    );
    frame.render_widget(
        Paragraph::new(status).style(Theme::status_bar_style()),
        layout.status_area,
    );
}
