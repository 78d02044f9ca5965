//! Add-task editor tests.
//!
//! - Entering and leaving capture focus
//! - Exclusive routing of keys while capturing
//! - Name length limit and bracketed paste

use super::helpers::*;
use crate::app::{App, AppEvent, Focus, MAX_TASK_NAME_CHARS};
use crate::core::{Task, WORK_SECS};
use ratatui::crossterm::event::KeyCode;

fn capturing_app() -> App {
    let mut app = App::new();
    assert!(press(&mut app, char_key('a')).is_empty());
    assert_eq!(app.focus(), Focus::Capturing);
    app
}

mod confirm_and_cancel {
    use super::*;

    #[test]
    fn typed_name_is_appended_and_saved() {
        let mut app = capturing_app();
        let next_id = app.tasks().next_id();

        assert!(type_text(&mut app, "buy milk").is_empty());
        let commands = press(&mut app, key(KeyCode::Enter));

        let added = Task::new(next_id, "buy milk", false);
        assert_eq!(app.tasks().tasks().last(), Some(&added));
        assert_eq!(app.tasks().selected(), Some(&added));
        assert_eq!(app.tasks().next_id(), next_id + 1);
        assert_eq!(app.focus(), Focus::Normal);
        assert_eq!(app.input_value(), "");

        let saved = single_save(&commands);
        assert_eq!(saved, &app.tasks().snapshot());
    }

    #[test]
    fn empty_confirm_adds_nothing() {
        let mut app = capturing_app();
        let before = app.tasks().snapshot();

        assert!(press(&mut app, key(KeyCode::Enter)).is_empty());
        assert_eq!(app.tasks().snapshot(), before);
        assert_eq!(app.focus(), Focus::Normal);
    }

    #[test]
    fn whitespace_name_consumes_no_id() {
        let mut app = capturing_app();
        let next_id = app.tasks().next_id();

        type_text(&mut app, "   ");
        assert!(press(&mut app, key(KeyCode::Enter)).is_empty());
        assert_eq!(app.tasks().next_id(), next_id);
        assert_eq!(app.tasks().len(), 2);
    }

    #[test]
    fn name_is_trimmed() {
        let mut app = capturing_app();
        type_text(&mut app, "  tea  ");
        press(&mut app, key(KeyCode::Enter));

        assert_eq!(app.tasks().tasks()[2].name, "tea");
    }

    #[test]
    fn esc_discards_draft() {
        let mut app = capturing_app();
        type_text(&mut app, "draft");

        assert!(press(&mut app, key(KeyCode::Esc)).is_empty());
        assert_eq!(app.focus(), Focus::Normal);
        assert_eq!(app.tasks().len(), 2);
        assert!(!app.should_quit());

        // A new capture starts from an empty editor.
        press(&mut app, char_key('a'));
        assert_eq!(app.input_value(), "");
    }

    #[test]
    fn ctrl_c_quits_while_capturing() {
        let mut app = capturing_app();
        type_text(&mut app, "half");

        assert!(press(&mut app, ctrl_key('c')).is_empty());
        assert!(app.should_quit());
        assert_eq!(app.tasks().len(), 2);
    }

    #[test]
    fn consecutive_adds_get_increasing_ids() {
        let mut app = App::new();
        for name in ["one", "two", "three"] {
            press(&mut app, char_key('a'));
            type_text(&mut app, name);
            press(&mut app, key(KeyCode::Enter));
        }

        let ids: Vec<_> = app.tasks().tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert_eq!(app.tasks().next_id(), 6);
        assert_eq!(app.tasks().cursor(), 4);
    }
}

mod routing {
    use super::*;

    #[test]
    fn command_keys_are_typed_not_executed() {
        let mut app = capturing_app();
        let selected_before = app.tasks().selected().cloned();

        let commands = type_text(&mut app, "qpdrmjk ");

        assert!(commands.is_empty());
        assert_eq!(app.input_value(), "qpdrmjk ");
        assert!(!app.should_quit());
        assert!(app.timer().is_running());
        assert_eq!(app.tasks().len(), 2);
        assert_eq!(app.tasks().selected().cloned(), selected_before);
    }

    #[test]
    fn ticks_still_count_down_while_capturing() {
        let mut app = capturing_app();
        app.update(AppEvent::Tick);

        assert_eq!(app.timer().remaining(), WORK_SECS - 1);
        assert_eq!(app.focus(), Focus::Capturing);
    }

    #[test]
    fn editing_keys_edit_the_draft() {
        let mut app = capturing_app();
        type_text(&mut app, "milk");
        press(&mut app, key(KeyCode::Backspace));
        press(&mut app, key(KeyCode::Home));
        type_text(&mut app, "s");

        assert_eq!(app.input_value(), "smil");
    }

    #[test]
    fn newline_keys_keep_a_single_line() {
        let mut app = capturing_app();
        type_text(&mut app, "ab");
        press(&mut app, ctrl_key('m'));
        press(&mut app, ctrl_key('j'));
        type_text(&mut app, "c");

        assert_eq!(app.input.textarea.lines().len(), 1);
        assert_eq!(app.input_value(), "abc");
    }
}

mod limits {
    use super::*;

    #[test]
    fn typing_stops_at_max_length() {
        let mut app = capturing_app();
        let long = "x".repeat(MAX_TASK_NAME_CHARS + 5);
        type_text(&mut app, &long);

        assert_eq!(app.input.char_count(), MAX_TASK_NAME_CHARS);
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.tasks().tasks()[2].name.chars().count(),
            MAX_TASK_NAME_CHARS
        );
    }

    #[test]
    fn multibyte_characters_count_once() {
        let mut app = capturing_app();
        let long = "é".repeat(MAX_TASK_NAME_CHARS + 1);
        type_text(&mut app, &long);

        assert_eq!(app.input.char_count(), MAX_TASK_NAME_CHARS);
    }
}

mod paste {
    use super::*;

    #[test]
    fn paste_inserts_at_cursor() {
        let mut app = capturing_app();
        type_text(&mut app, "buy ");

        assert!(app.update(AppEvent::Paste("oat milk".into())).is_empty());
        assert_eq!(app.input_value(), "buy oat milk");
    }

    #[test]
    fn pasted_line_breaks_become_spaces() {
        let mut app = capturing_app();
        app.update(AppEvent::Paste("one\r\ntwo\nthree\tfour".into()));

        assert_eq!(app.input_value(), "one two threefour");
        assert_eq!(app.input.textarea.lines().len(), 1);
    }

    #[test]
    fn paste_is_clipped_to_capacity() {
        let mut app = capturing_app();
        type_text(&mut app, "abc");
        app.update(AppEvent::Paste("y".repeat(MAX_TASK_NAME_CHARS)));

        assert_eq!(app.input.char_count(), MAX_TASK_NAME_CHARS);
        assert!(app.input_value().starts_with("abcy"));
    }

    #[test]
    fn paste_outside_capture_is_ignored() {
        let mut app = App::new();
        let before = app.tasks().snapshot();

        assert!(app.update(AppEvent::Paste("q".into())).is_empty());
        assert!(!app.should_quit());
        assert_eq!(app.tasks().snapshot(), before);
        assert_eq!(app.focus(), Focus::Normal);
    }
}
