//! Shared test utilities for the app module.
//!
//! - Key event helpers (`char_key`, `key`, `ctrl_key`)
//! - `press` / `type_text` - feed keys through the dispatcher
//! - `app_with_tasks` - an `App` whose list was replaced by a loaded snapshot
//! - `render_app_to_terminal` / `buffer_lines` - `TestBackend` rendering

use crate::app::{App, AppEvent, Command, LoadOutcome};
use crate::core::{Snapshot, Task};
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for `Ctrl+<c>`.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Dispatches one key and returns the commands it produced.
pub fn press(app: &mut App, key: KeyEvent) -> Vec<Command> {
    app.update(AppEvent::Key(key))
}

/// Dispatches each character of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) -> Vec<Command> {
    text.chars().flat_map(|c| press(app, char_key(c))).collect()
}

/// Returns the snapshot carried by the single save command in `commands`.
pub fn single_save(commands: &[Command]) -> &Snapshot {
    match commands {
        [Command::Save(snapshot)] => snapshot,
        other => panic!("expected one save command, got {other:?}"),
    }
}

/// Creates an `App` whose list was loaded from `tasks`.
pub fn app_with_tasks(tasks: Vec<Task>, next_id: i64) -> App {
    let mut app = App::new();
    let commands = app.update(AppEvent::Loaded(LoadOutcome::Loaded(Snapshot {
        tasks,
        next_id,
    })));
    assert!(commands.is_empty());
    app
}

/// Creates an `App` with an empty loaded list.
pub fn app_with_empty_list() -> App {
    app_with_tasks(Vec::new(), 1)
}

/// Renders the app to a `TestBackend` terminal.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(app: &App, width: u16, height: u16) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| app.render(f))?;
    Ok(terminal)
}

/// Returns the rendered buffer as one string per row.
#[must_use]
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
