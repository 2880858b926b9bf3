//! Real terminal backend for the selector: ratatui on crossterm.
//!
//! The UI is drawn on stderr so stdout carries only the final confirmation
//! line.  Raw mode and the alternate screen are undone on drop.

use std::io::{stderr, Stderr};
use std::path::{Path, PathBuf};

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::AppConfig;
use crate::core::entry::FileEntry;
use crate::error::MdifyError;
use crate::ui::screen::{self, ScreenView};

use super::event::{is_interrupt, map_event, InputEvent};
use super::selector::SelectorIo;

pub struct TuiIo {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    config: AppConfig,
    dir: PathBuf,
}

impl TuiIo {
    /// Enter raw mode and the alternate screen.
    ///
    /// The ratatui terminal is built first; once raw mode is on, every
    /// failure path leaves it again before returning.
    pub fn new(dir: &Path, config: AppConfig) -> anyhow::Result<Self> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;

        enable_raw_mode()?;
        if let Err(e) = execute!(terminal.backend_mut(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        if let Err(e) = terminal.clear() {
            let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        Ok(Self {
            terminal,
            config,
            dir: dir.to_path_buf(),
        })
    }
}

impl SelectorIo for TuiIo {
    fn render_frame(
        &mut self,
        entries: &[FileEntry],
        flags: &[bool],
        cursor: usize,
    ) -> anyhow::Result<()> {
        let view = ScreenView {
            dir: &self.dir,
            config: &self.config,
            entries,
            flags,
            cursor,
        };
        self.terminal.draw(|frame| screen::draw(frame, &view))?;
        Ok(())
    }

    fn read_next_input(&mut self) -> anyhow::Result<InputEvent> {
        let ev = event::read()?;
        if is_interrupt(&ev) {
            return Err(MdifyError::Interrupted.into());
        }
        Ok(map_event(&self.config, &ev))
    }
}

impl Drop for TuiIo {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
