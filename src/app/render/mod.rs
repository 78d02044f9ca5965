//! Rendering methods for the App.
//!
//! - **Text**: [`App::view`], the plain projection used by tests and logs
//! - **Terminal**: [`App::render`], the same content painted with `ratatui`
//!
//! Both are read-only over the state.

mod text;

pub use text::FAREWELL;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use self::text::{
    CAPTURE_HINT, CAPTURE_TITLE, EMPTY_LIST, IDLE_HINTS, KEY_HINTS, TITLE, status_label, task_line,
};
use super::{App, Focus, calculate_layout};
use crate::core::format_clock;

impl App {
    /// Renders the application UI.
    pub fn render(&self, frame: &mut Frame) {
        if self.should_quit() {
            frame.render_widget(Paragraph::new(FAREWELL), frame.area());
            return;
        }

        let layout = calculate_layout(frame.area());
        self.render_header(frame, layout.header);
        self.render_timer(frame, layout.timer);
        self.render_tasks(frame, layout.tasks);
        match self.focus {
            Focus::Capturing => self.render_capture(frame, layout.prompt),
            Focus::Normal => self.render_hints(frame, layout.prompt),
        }
        self.render_footer(frame, layout.footer);
        self.render_error(frame, layout.error);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(Span::styled(format!(" {TITLE} "), self.theme.header_style()));
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_timer(&self, frame: &mut Frame, area: Rect) {
        let mode = self.timer.mode();
        let running = self.timer.is_running();
        let lines = vec![
            Line::from(vec![
                Span::styled(" Mode: ", self.theme.muted_style()),
                Span::styled(mode.label(), self.theme.mode_style(mode)),
            ]),
            Line::from(vec![
                Span::styled(" Time: ", self.theme.muted_style()),
                Span::styled(
                    format_clock(self.timer.remaining()),
                    self.theme.highlight_style(),
                ),
                Span::styled(
                    format!(" ({})", status_label(running)),
                    self.theme.status_style(running),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Renders the task list, scrolled so the selected row stays visible.
    fn render_tasks(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Tasks ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());

        let lines: Vec<Line> = if self.tasks.is_empty() {
            vec![Line::from(Span::styled(EMPTY_LIST, self.theme.muted_style()))]
        } else {
            let cursor = self.tasks.cursor();
            self.tasks
                .tasks()
                .iter()
                .enumerate()
                .map(|(index, task)| {
                    let selected = index == cursor;
                    let style = if selected {
                        self.theme.highlight_style()
                    } else if task.done {
                        self.theme.done_style()
                    } else {
                        self.theme.normal_style()
                    };
                    Line::from(Span::styled(task_line(task, selected), style))
                })
                .collect()
        };

        let visible = usize::from(block.inner(area).height).max(1);
        let offset = self.tasks.cursor().saturating_sub(visible - 1);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
    }

    fn render_capture(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {CAPTURE_TITLE} "))
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(Span::styled(
                format!(" {CAPTURE_HINT} "),
                self.theme.muted_style(),
            )))
            .border_style(self.theme.border_style());

        let mut textarea = self.input.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        frame.render_widget(&textarea, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(self.theme.border_style());
        let lines: Vec<Line> = IDLE_HINTS
            .iter()
            .map(|hint| Line::from(Span::styled(*hint, self.theme.muted_style())))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Line::from(Span::styled(format!(" {KEY_HINTS}"), self.theme.muted_style()));
        frame.render_widget(Paragraph::new(footer), area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect) {
        let Some(error) = &self.last_error else {
            return;
        };
        let line = Line::from(Span::styled(
            format!(" Error: {error}"),
            self.theme.error_style(),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
