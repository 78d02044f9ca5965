//! Terminal event configuration.
//!
//! Bracketed paste delivers a pasted task name as one `Event::Paste` instead
//! of a burst of key presses, so an embedded newline cannot submit it early.

use std::io::stdout;

use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// Enables bracketed paste for its lifetime.
///
/// Dropping the guard disables it again, including during a panic unwind.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
}

impl TerminalEventGuard {
    /// Must be created after `ratatui::init`, which resets terminal flags.
    #[must_use]
    pub fn new() -> Self {
        let bracketed_paste_enabled = match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                debug!("bracketed paste enabled");
                true
            }
            Err(e) => {
                // Not fatal: pasted text then arrives as individual keys.
                warn!(error = %e, "could not enable bracketed paste");
                false
            }
        };
        Self {
            bracketed_paste_enabled,
        }
    }

    #[must_use]
    pub const fn bracketed_paste_enabled(&self) -> bool {
        self.bracketed_paste_enabled
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
