//! Plain-text projection of the application state.
//!
//! [`App::view`] is the reference rendering: one text block with the timer,
//! the task list, the active prompt and the last error. The terminal renderer
//! paints the same pieces with styles.

use std::fmt::Write;

use crate::app::{App, Focus};
use crate::core::{Task, format_clock};

/// Shown instead of everything else once quit is requested.
pub const FAREWELL: &str = "Bye!";

pub(crate) const TITLE: &str = "Pomodoro";
pub(crate) const EMPTY_LIST: &str = "there are no tasks";
pub(crate) const IDLE_HINTS: [&str; 2] = [
    "Press 'a' to add a new task",
    "Press 'k'/'j' to navigate | 'enter'/'space' to complete task",
];
pub(crate) const CAPTURE_TITLE: &str = "add a task:";
pub(crate) const CAPTURE_HINT: &str = "(Enter to add, Esc to cancel)";
pub(crate) const KEY_HINTS: &str = "Keys: 'p' pause | 'r' reset | 'm' mode | 'd' delete | 'q' quit";

pub(crate) const fn status_label(running: bool) -> &'static str {
    if running { "running" } else { "paused" }
}

pub(crate) const fn done_marker(done: bool) -> &'static str {
    if done { "[X]" } else { "[ ]" }
}

/// Formats one task row, with a trailing `<` on the selected task.
pub(crate) fn task_line(task: &Task, selected: bool) -> String {
    let mut line = format!(
        "ID: {} | title: {} | done: {}",
        task.id,
        task.name,
        done_marker(task.done)
    );
    if selected {
        line.push_str(" <");
    }
    line
}

impl App {
    /// Renders the whole state as text.
    #[must_use]
    pub fn view(&self) -> String {
        if self.should_quit() {
            return FAREWELL.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}\n");
        let _ = writeln!(out, "Mode: {}", self.timer.mode().label());
        let _ = writeln!(
            out,
            "Time: {} ({})\n",
            format_clock(self.timer.remaining()),
            status_label(self.timer.is_running())
        );

        out.push_str("Tasks:\n");
        if self.tasks.is_empty() {
            let _ = writeln!(out, "{EMPTY_LIST}");
        } else {
            for (index, task) in self.tasks.tasks().iter().enumerate() {
                let _ = writeln!(out, "{}", task_line(task, index == self.tasks.cursor()));
            }
        }
        out.push('\n');

        match self.focus {
            Focus::Capturing => {
                let _ = writeln!(out, "{CAPTURE_TITLE}");
                let _ = writeln!(out, "> {}", self.input.value());
                let _ = writeln!(out, "{CAPTURE_HINT}");
            }
            Focus::Normal => {
                for hint in IDLE_HINTS {
                    let _ = writeln!(out, "{hint}");
                }
            }
        }
        out.push('\n');

        let _ = writeln!(out, "{KEY_HINTS}");
        if let Some(error) = &self.last_error {
            let _ = writeln!(out, "Error: {error}");
        }
        out
    }
}
