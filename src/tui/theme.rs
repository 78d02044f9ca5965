//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::Mode;

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Mode label color during work.
    pub work: Color,
    /// Mode label color during a break.
    pub rest: Color,
    /// Completed task color.
    pub done: Color,
    /// Paused status color.
    pub paused: Color,
    /// Error color.
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            work: Color::LightRed,
            rest: Color::Green,
            done: Color::DarkGray,
            paused: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl Theme {
    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the mode label.
    #[must_use]
    pub fn mode_style(&self, mode: Mode) -> Style {
        let color = match mode {
            Mode::Work => self.work,
            Mode::Break => self.rest,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for the run/pause status.
    #[must_use]
    pub fn status_style(&self, running: bool) -> Style {
        if running {
            self.muted_style()
        } else {
            Style::default().fg(self.paused)
        }
    }

    /// Style for a completed task.
    #[must_use]
    pub fn done_style(&self) -> Style {
        Style::default()
            .fg(self.done)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_uses_accent_and_bold() {
        let theme = Theme::default();
        let style = theme.header_style();

        assert_eq!(style.fg, Some(theme.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn mode_style_distinguishes_work_and_break() {
        let theme = Theme::default();

        assert_eq!(theme.mode_style(Mode::Work).fg, Some(theme.work));
        assert_eq!(theme.mode_style(Mode::Break).fg, Some(theme.rest));
    }

    #[test]
    fn paused_status_is_highlighted() {
        let theme = Theme::default();

        assert_eq!(theme.status_style(false).fg, Some(theme.paused));
        assert_eq!(theme.status_style(true).fg, Some(theme.muted));
    }

    #[test]
    fn done_style_crosses_out() {
        let theme = Theme::default();
        assert!(
            theme
                .done_style()
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn custom_colors_flow_into_styles() {
        let theme = Theme {
            accent: Color::Magenta,
            error: Color::LightRed,
            ..Theme::default()
        };

        assert_eq!(theme.highlight_style().fg, Some(Color::Magenta));
        assert_eq!(theme.error_style().fg, Some(Color::LightRed));
    }
}
