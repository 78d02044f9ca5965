//! Application state structures.
//!
//! - **`Focus`**: which sub-machine owns the keyboard
//! - **`TaskInput`**: the single-line editor used while composing a task name
//! - **`AppEvent`** / **`Command`**: what flows into and out of the dispatcher
//! - **`AppError`**: the single surfaced error slot

use ratatui::crossterm::event::KeyEvent;
use thiserror::Error;
use tui_textarea::TextArea;

use crate::core::Snapshot;

/// Maximum length of a task name, in characters.
pub const MAX_TASK_NAME_CHARS: usize = 200;

/// Placeholder shown in the empty task name editor.
const INPUT_PLACEHOLDER: &str = "input something";

/// Owner of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys are matched against the command keymap.
    #[default]
    Normal,
    /// Keys edit the new task name.
    Capturing,
}

/// Events delivered to the dispatcher, one at a time.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One second has elapsed.
    Tick,
    /// A key was pressed.
    Key(KeyEvent),
    /// Text arrived through bracketed paste.
    Paste(String),
    /// A load finished.
    Loaded(LoadOutcome),
    /// A save finished; `Err` carries the failure message.
    Saved(Result<(), String>),
}

/// Result of reading the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing has been saved yet: no file, or one without a task list.
    Missing,
    /// A snapshot was read and repaired.
    Loaded(Snapshot),
    /// The file exists but could not be read or decoded.
    Failed(String),
}

/// Follow-up work requested by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver the next [`AppEvent::Tick`] after one interval.
    ScheduleTick,
    /// Read the snapshot file.
    Load,
    /// Overwrite the snapshot file with this content.
    Save(Snapshot),
}

/// Non-fatal I/O failure shown to the user until the next outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("load failed: {0}")]
    Load(String),
    #[error("save failed: {0}")]
    Save(String),
}

/// Editor state for composing a task name.
///
/// Wraps a single-line `tui-textarea` [`TextArea`]; newline keys never reach it.
pub struct TaskInput {
    pub textarea: TextArea<'static>,
}

impl TaskInput {
    #[must_use]
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        Self { textarea }
    }

    /// Returns the typed name.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join(" ")
    }

    /// Returns the number of characters typed.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.textarea
            .lines()
            .iter()
            .map(|line| line.chars().count())
            .sum()
    }

    /// Returns how many more characters fit.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        MAX_TASK_NAME_CHARS.saturating_sub(self.char_count())
    }

    /// Discards the typed text.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for TaskInput {
    fn default() -> Self {
        Self::new()
    }
}
