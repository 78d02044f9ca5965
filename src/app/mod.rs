//! Main application state and logic.
//!
//! [`App`] is the root state machine. It is owned by the main loop and is the
//! only thing that mutates pomodoro state. Submodules:
//! - `events` - the dispatcher: one [`AppEvent`] in, zero or more [`Command`]s out
//! - `render` - text and terminal projections of the state
//! - `layout` - terminal layout calculation
//! - `runtime` - executes commands and queues their completion events
//! - `state` - focus, editor, event and command types
//!
//! ## Focus
//!
//! - **`Normal`**: keys are commands (pause, reset, add, toggle, ...)
//! - **`Capturing`**: keys edit a new task name until Enter or Esc
//!
//! `Ctrl+C` quits from either focus.

mod events;
mod layout;
mod render;
pub mod runtime;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{PomodoroLayout, calculate_layout};
pub use render::FAREWELL;
pub use runtime::{Runtime, TICK_INTERVAL};
pub use state::{AppError, AppEvent, Command, Focus, LoadOutcome, MAX_TASK_NAME_CHARS, TaskInput};

use crate::core::{TaskList, Timer, TimerDurations};
use crate::tui::Theme;

/// Root application state.
pub struct App {
    /// Countdown sub-state.
    pub(crate) timer: Timer,
    /// Task store, including the selection cursor.
    pub(crate) tasks: TaskList,
    /// Keyboard owner.
    pub(crate) focus: Focus,
    /// Task name editor, meaningful only while capturing.
    pub(crate) input: TaskInput,
    /// Last surfaced I/O error.
    pub(crate) last_error: Option<AppError>,
    /// Set once quit is requested; no further commands are issued.
    quitting: bool,
    pub(crate) theme: Theme,
}

impl App {
    /// Creates the startup state: seed tasks and a running work period.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(TimerDurations::default())
    }

    /// Creates the startup state with custom mode durations.
    #[must_use]
    pub fn with_durations(durations: TimerDurations) -> Self {
        Self {
            timer: Timer::new(durations),
            tasks: TaskList::seeded(),
            focus: Focus::Normal,
            input: TaskInput::new(),
            last_error: None,
            quitting: false,
            theme: Theme::default(),
        }
    }

    /// Commands to run once at startup: arm the clock and load saved tasks.
    #[must_use]
    pub fn init(&self) -> Vec<Command> {
        vec![Command::ScheduleTick, Command::Load]
    }

    /// Returns true once quit has been requested.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quitting
    }

    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// Returns the text typed so far for the new task.
    #[must_use]
    pub fn input_value(&self) -> String {
        self.input.value()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
