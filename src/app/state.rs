//! Selection state owned by a single run of the selector.
//!
//! The entry list is fixed at construction; only the flags, the cursor and
//! the outcome change while the loop runs.

use crate::core::entry::FileEntry;

/// Where the selection loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Browsing,
    Confirmed,
    Cancelled,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Browsing
    }
}

/// Entries paired one-to-one with their selected flag, plus the cursor.
#[derive(Debug, Clone)]
pub struct SelectorState {
    entries: Vec<FileEntry>,
    /// `flags[i]` is the selected flag of `entries[i]`.
    flags: Vec<bool>,
    cursor: usize,
    outcome: Outcome,
}

impl SelectorState {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        let flags = vec![false; entries.len()];
        Self {
            entries,
            flags,
            cursor: 0,
            outcome: Outcome::Browsing,
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() && self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Flip the flag under the cursor.  No-op on an empty list.
    pub fn toggle(&mut self) {
        if let Some(flag) = self.flags.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    pub fn confirm(&mut self) {
        self.outcome = Outcome::Confirmed;
    }

    pub fn cancel(&mut self) {
        self.outcome = Outcome::Cancelled;
    }

    /// Flagged entries in insertion order when confirmed; empty in every
    /// other state.
    pub fn result(&self) -> Vec<FileEntry> {
        if self.outcome != Outcome::Confirmed {
            return Vec::new();
        }
        self.entries
            .iter()
            .zip(&self.flags)
            .filter(|(_, &selected)| selected)
            .map(|(entry, _)| entry.clone())
            .collect()
    }
}
