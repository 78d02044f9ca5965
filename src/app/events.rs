//! Event dispatch for the App.
//!
//! [`App::update`] is the single entry point. Routing order:
//! 1. quit already requested: ignore everything
//! 2. `Tick`: advance the timer and re-arm the clock
//! 3. keys and pastes: the capture editor if it owns focus, else the keymap
//! 4. load/save completions: update tasks and the error slot
//!
//! Anything else leaves the state untouched.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::App;
use crate::app::state::{AppError, AppEvent, Command, Focus, LoadOutcome, MAX_TASK_NAME_CHARS};

impl App {
    /// Applies one event and returns the follow-up commands.
    pub fn update(&mut self, event: AppEvent) -> Vec<Command> {
        if self.should_quit() {
            return Vec::new();
        }

        match event {
            AppEvent::Tick => {
                self.timer.tick();
                vec![Command::ScheduleTick]
            }
            AppEvent::Key(key) => match self.focus {
                Focus::Capturing => self.handle_capture_key(key),
                Focus::Normal => self.handle_normal_key(key),
            },
            AppEvent::Paste(text) => {
                if self.focus == Focus::Capturing {
                    self.handle_paste(&text);
                }
                Vec::new()
            }
            AppEvent::Loaded(outcome) => {
                self.apply_load(outcome);
                Vec::new()
            }
            AppEvent::Saved(result) => {
                self.apply_save(result);
                Vec::new()
            }
        }
    }

    /// Handles a key while the command keymap owns focus.
    ///
    /// Key bindings:
    /// - `q` / `Esc` / `Ctrl+C` - quit
    /// - `p` - pause or resume the timer
    /// - `r` - restart the current mode
    /// - `m` - switch between work and break
    /// - `a` - start typing a new task
    /// - `k` / `Up`, `j` / `Down` - move the selection
    /// - `Space` / `Enter` - toggle the selected task
    /// - `d` - delete the selected task
    fn handle_normal_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_hard_abort(&key) {
            self.quit();
            return Vec::new();
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Vec::new();
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('p') => self.timer.toggle_pause(),
            KeyCode::Char('r') => self.timer.reset(),
            KeyCode::Char('m') => self.timer.switch_mode(),
            KeyCode::Char('a') => self.begin_capture(),
            KeyCode::Char('k') | KeyCode::Up => self.tasks.move_cursor(-1),
            KeyCode::Char('j') | KeyCode::Down => self.tasks.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.tasks.toggle_selected() {
                    return self.save_command();
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.tasks.remove_selected() {
                    debug!(id = task.id, "task removed");
                    return self.save_command();
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// Handles a key while the task name editor owns focus.
    ///
    /// `Enter` commits, `Esc` discards, `Ctrl+C` quits. Newline keys are
    /// dropped so the name stays on one line; everything else edits the text,
    /// and an edit that overflows the name limit is rolled back.
    fn handle_capture_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_hard_abort(&key) {
            self.quit();
            return Vec::new();
        }

        match key.code {
            KeyCode::Enter => return self.commit_capture(),
            KeyCode::Esc => self.end_capture(),
            KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                if self.input.textarea.input(key) && self.input.char_count() > MAX_TASK_NAME_CHARS {
                    self.input.textarea.undo();
                }
            }
        }
        Vec::new()
    }

    /// Inserts pasted text into the task name editor.
    ///
    /// Line breaks become spaces, other control characters are dropped, and
    /// the text is clipped to the remaining name capacity.
    fn handle_paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control())
            .take(self.input.remaining_capacity())
            .collect();
        if !filtered.is_empty() {
            self.input.textarea.insert_str(&filtered);
        }
    }

    fn begin_capture(&mut self) {
        self.input.clear();
        self.focus = Focus::Capturing;
    }

    fn end_capture(&mut self) {
        self.input.clear();
        self.focus = Focus::Normal;
    }

    fn commit_capture(&mut self) -> Vec<Command> {
        let name = self.input.value();
        self.end_capture();
        match self.tasks.append(&name) {
            Some(id) => {
                debug!(id, "task added");
                self.save_command()
            }
            None => Vec::new(),
        }
    }

    fn save_command(&self) -> Vec<Command> {
        vec![Command::Save(self.tasks.snapshot())]
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.quitting = true;
    }

    /// Applies a load result.
    ///
    /// A missing file keeps the seed list. A successful read replaces the list
    /// and clears the error slot; a failure is surfaced and the current list
    /// stays authoritative.
    fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Missing => {}
            LoadOutcome::Loaded(snapshot) => {
                self.tasks.replace(snapshot);
                self.last_error = None;
            }
            LoadOutcome::Failed(message) => {
                warn!(error = %message, "keeping in-memory tasks after failed load");
                self.last_error = Some(AppError::Load(message));
            }
        }
    }

    /// Applies a save result: success clears the error slot, failure sets it.
    fn apply_save(&mut self, result: Result<(), String>) {
        self.last_error = result.err().map(AppError::Save);
    }
}

/// `Ctrl+C` quits from any focus.
fn is_hard_abort(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
