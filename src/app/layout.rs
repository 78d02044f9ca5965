//! Layout calculation for the terminal view.
//!
//! Single source of truth for the screen split so rendering and tests agree
//! on the area each section gets.

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the main screen, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PomodoroLayout {
    /// Title line.
    pub header: Rect,
    /// Mode and remaining time (2 lines).
    pub timer: Rect,
    /// Bordered task list (grows).
    pub tasks: Rect,
    /// Bordered add-task editor or idle hints.
    pub prompt: Rect,
    /// Key hints.
    pub footer: Rect,
    /// Last error, blank when there is none.
    pub error: Rect,
}

const LAYOUT_CONSTRAINTS: [Constraint; 6] = [
    Constraint::Length(1), // Header
    Constraint::Length(2), // Mode + time
    Constraint::Min(3),    // Tasks (grows)
    Constraint::Length(4), // Prompt (2 lines + borders)
    Constraint::Length(1), // Footer
    Constraint::Length(1), // Error
];

/// Splits `area` into the screen sections.
#[must_use]
pub fn calculate_layout(area: Rect) -> PomodoroLayout {
    let chunks = Layout::vertical(LAYOUT_CONSTRAINTS).split(area);
    PomodoroLayout {
        header: chunks[0],
        timer: chunks[1],
        tasks: chunks[2],
        prompt: chunks[3],
        footer: chunks[4],
        error: chunks[5],
    }
}
