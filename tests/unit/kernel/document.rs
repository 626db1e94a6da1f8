use super::*;
use crate::core::error::ErrorSource;
use crate::services::spelling::WordListSpeller;
use crate::views::{shared_view, ScreenLayout, View};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

type Log = Rc<RefCell<Vec<ChangeKind>>>;

struct Recorder {
    log: Log,
    error: ErrorState,
}

impl View for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn setup(&mut self, _config: &EditorConfig, _layout: &ScreenLayout) -> Result<(), EditorError> {
        Ok(())
    }

    fn on_update(&mut self, notification: &ChangeNotification<'_>) {
        self.log.borrow_mut().push(notification.kind);
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn rendered_lines(&self) -> &[String] {
        &[]
    }

    fn repaint_count(&self) -> usize {
        0
    }
}

impl ErrorReporter for Recorder {
    fn error_state(&self) -> &ErrorState {
        &self.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.error
    }
}

fn observed(lines: &[&str]) -> (DocumentModel, Log) {
    let mut doc = DocumentModel::new("draft.quire", &EditorConfig::default()).with_lines(lines);
    let log = Log::default();
    let (_, view) = shared_view(Recorder {
        log: log.clone(),
        error: ErrorState::None,
    });
    doc.subscribe(view);
    (doc, log)
}

fn kinds(log: &Log) -> Vec<ChangeKind> {
    log.borrow_mut().drain(..).collect()
}

#[test]
fn typing_notifies_the_cursor_line() {
    let (mut doc, log) = observed(&[""]);
    doc.insert_str("a hello", true).unwrap();
    assert_eq!(doc.lines(), vec!["a hello"]);
    assert_eq!(doc.cursor(), CursorPosition::new(0, 7));
    assert!(doc.is_modified());
    assert!(kinds(&log).iter().all(|k| *k == ChangeKind::Line));
}

#[test]
fn overwrite_replaces_under_the_cursor() {
    let (mut doc, _log) = observed(&["cat"]);
    doc.insert_char('b', false).unwrap();
    assert_eq!(doc.lines(), vec!["bat"]);
}

#[test]
fn split_and_join_notify_to_the_end() {
    let (mut doc, log) = observed(&["helloworld"]);
    doc.set_cursor(CursorPosition::new(0, 5)).unwrap();
    kinds(&log);
    doc.split_line().unwrap();
    assert_eq!(doc.lines(), vec!["hello", "world"]);
    assert_eq!(doc.cursor(), CursorPosition::new(1, 0));
    doc.delete_backward().unwrap();
    assert_eq!(doc.lines(), vec!["helloworld"]);
    assert_eq!(doc.cursor(), CursorPosition::new(0, 5));
    assert_eq!(kinds(&log), vec![ChangeKind::End, ChangeKind::End]);
}

#[test]
fn boundary_moves_are_user_errors_without_notification() {
    let (mut doc, log) = observed(&["ab"]);
    let err = doc.cursor_left().unwrap_err();
    assert_eq!(err.source, ErrorSource::User);
    assert_eq!(err.code, codes::AT_LINE_START);
    assert_eq!(doc.cursor(), CursorPosition::new(0, 0));
    assert_eq!(doc.cursor_up().unwrap_err().code, codes::AT_FIRST_LINE);
    assert_eq!(doc.cursor_down().unwrap_err().code, codes::AT_LAST_LINE);
    assert_eq!(doc.delete_backward().unwrap_err().code, codes::AT_DOCUMENT_START);
    assert!(kinds(&log).is_empty());
    // Model editing ops leave latching to the caller.
    assert!(!doc.has_error());
}

#[test]
fn vertical_moves_clamp_the_column() {
    let (mut doc, log) = observed(&["long line", "ab"]);
    doc.cursor_line_end().unwrap();
    doc.cursor_down().unwrap();
    assert_eq!(doc.cursor(), CursorPosition::new(1, 2));
    assert_eq!(kinds(&log), vec![ChangeKind::Cursor, ChangeKind::Cursor]);
}

#[test]
fn paging_stops_at_the_ends() {
    let lines: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let (mut doc, _log) = observed(&refs);
    doc.page_down(19).unwrap();
    assert_eq!(doc.cursor().row, 19);
    doc.page_down(19).unwrap();
    assert_eq!(doc.cursor().row, 29);
    assert_eq!(doc.page_down(19).unwrap_err().code, codes::AT_LAST_LINE);
    doc.page_up(100).unwrap();
    assert_eq!(doc.cursor().row, 0);
}

#[test]
fn set_cursor_rejects_positions_outside_the_body() {
    let (mut doc, _log) = observed(&["abc"]);
    let err = doc.set_cursor(CursorPosition::new(0, 4)).unwrap_err();
    assert_eq!(err.source, ErrorSource::Param);
    assert_eq!(err.code, codes::INVALID_CURSOR);
    assert!(doc.set_cursor(CursorPosition::new(1, 0)).is_err());
    doc.set_cursor(CursorPosition::new(0, 3)).unwrap();
}

#[test]
fn message_line_clear_is_silent_when_already_empty() {
    let (mut doc, log) = observed(&[""]);
    doc.clear_msg_line();
    assert!(kinds(&log).is_empty());
    doc.set_msg_line("Saved");
    doc.clear_msg_line();
    assert_eq!(kinds(&log), vec![ChangeKind::MsgLine, ChangeKind::MsgLine]);
    assert_eq!(doc.msg_line(), "");
}

#[test]
fn status_line_reports_position_and_words() {
    let (mut doc, log) = observed(&["one two", "three"]);
    let now = Instant::now();
    doc.create_new_session(now).unwrap();
    doc.set_cursor(CursorPosition::new(1, 5)).unwrap();
    doc.insert_str(" four", true).unwrap();
    kinds(&log);
    doc.set_status_line(now + Duration::from_secs(65));
    assert_eq!(
        doc.status_line(),
        "draft | Ln 2/2 Col 11 | Words 4 (+1) | session 01:05 | typing"
    );
    assert_eq!(kinds(&log), vec![ChangeKind::StatusLine]);
}

#[test]
fn set_mode_changes_help_without_notifying() {
    let (mut doc, log) = observed(&[""]);
    doc.set_mode(Mode::Properties);
    assert_eq!(doc.mode(), Mode::Properties);
    assert!(doc.help_line().starts_with("Properties"));
    assert!(kinds(&log).is_empty());
    doc.refresh();
    assert_eq!(kinds(&log), vec![ChangeKind::All]);
}

#[test]
fn sessions_open_once_and_record_pauses() {
    let (mut doc, log) = observed(&["word"]);
    let t0 = Instant::now();
    doc.create_new_session(t0).unwrap();
    let err = doc.create_new_session(t0).unwrap_err();
    assert_eq!(err.code, codes::SESSION_ALREADY_OPEN);

    let threshold = EditorConfig::default().pause_threshold();
    doc.pause_processing(t0 + threshold, t0, false).unwrap();
    assert!(doc.is_paused());
    assert_eq!(kinds(&log), vec![ChangeKind::StatusLine]);

    let resumed = t0 + threshold + Duration::from_secs(10);
    doc.pause_processing(resumed, resumed, true).unwrap();
    assert!(!doc.is_paused());

    doc.process_session_done(resumed, resumed).unwrap();
    let record = doc.sessions().last().unwrap();
    assert!(!record.is_open());
    assert_eq!(record.pauses.len(), 1);
    assert_eq!(record.end_words, Some(1));
    assert_eq!(
        doc.pause_processing(resumed, resumed, false).unwrap_err().code,
        codes::NO_OPEN_SESSION
    );
}

#[test]
fn property_fields_are_edited_in_place() {
    let (mut doc, log) = observed(&[""]);
    assert_eq!(doc.selected_field(), PropertyField::Title);
    assert_eq!(doc.select_prev_field().unwrap_err().code, codes::AT_FIRST_FIELD);
    for ch in "Draft".chars() {
        doc.field_insert_char(ch, true).unwrap();
    }
    doc.field_delete_backward().unwrap();
    assert_eq!(doc.properties().title, "Draf");
    assert_eq!(doc.field_col(), 4);
    doc.field_cursor_home().unwrap();
    doc.field_insert_char('X', false).unwrap();
    assert_eq!(doc.properties().title, "Xraf");

    kinds(&log);
    doc.select_next_field().unwrap();
    assert_eq!(doc.selected_field(), PropertyField::Author);
    assert_eq!(kinds(&log), vec![ChangeKind::Props]);
    doc.select_next_field().unwrap();
    doc.select_next_field().unwrap();
    assert_eq!(doc.select_next_field().unwrap_err().code, codes::AT_LAST_FIELD);
}

#[test]
fn full_field_rejects_more_text() {
    let (mut doc, _log) = observed(&[""]);
    for _ in 0..PropertyField::Title.max_len() {
        doc.field_insert_char('a', true).unwrap();
    }
    let err = doc.field_insert_char('a', true).unwrap_err();
    assert_eq!(err.code, codes::FIELD_FULL);
}

#[test]
fn spelling_walks_unknown_words_and_replaces_them() {
    let speller = WordListSpeller::from_words(["the", "cat", "sat", "mat"]);
    let (doc, log) = observed(&["The cst sat", "on the mxt"]);
    let mut doc = doc.with_speller(Box::new(speller));
    doc.set_mode(Mode::Spelling);
    let target = doc.spell_target().unwrap().clone();
    assert_eq!((target.row, target.start, target.word.as_str()), (0, 4, "cst"));
    assert_eq!(doc.spell_suggestions(), ["cat".to_string()]);

    doc.spell_replace(1).unwrap();
    assert_eq!(doc.line(0).unwrap(), "The cat sat");
    assert_eq!(doc.spell_target().unwrap().word, "on");
    assert_eq!(kinds(&log), vec![ChangeKind::Spell]);

    assert_eq!(doc.spell_replace(5).unwrap_err().code, codes::NO_SUCH_SUGGESTION);
    doc.spell_ignore().unwrap();
    assert_eq!(doc.spell_target().unwrap().word, "mxt");
    doc.spell_replace(1).unwrap();
    assert_eq!(doc.line(1).unwrap(), "on the mat");
    assert!(doc.spell_target().is_none());
    assert_eq!(doc.spell_next().unwrap_err().code, codes::NO_MORE_MISSPELLINGS);
}

#[test]
fn replacement_keeps_a_leading_capital() {
    let speller = WordListSpeller::from_words(["hello"]);
    let mut doc = DocumentModel::new("x.quire", &EditorConfig::default())
        .with_lines(["Helo"])
        .with_speller(Box::new(speller));
    doc.set_mode(Mode::Spelling);
    doc.spell_replace(1).unwrap();
    assert_eq!(doc.line(0).unwrap(), "Hello");
}

#[test]
fn save_and_reopen_round_trip_through_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("story.quire");
    let config = EditorConfig::default();
    let mut doc = DocumentModel::open(&path, &config).unwrap();
    doc.insert_str("Once upon", true).unwrap();
    doc.field_insert_char('T', true).unwrap();
    doc.save().unwrap();
    assert_eq!(doc.save_count(), 1);
    assert!(!doc.is_modified());

    let reopened = DocumentModel::open(&path, &config).unwrap();
    assert_eq!(reopened.lines(), vec!["Once upon"]);
    assert_eq!(reopened.properties().title, "T");
}

#[test]
fn failed_save_latches_a_data_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("story.quire");
    let mut doc = DocumentModel::new(&path, &EditorConfig::default());
    let err = doc.save().unwrap_err();
    assert_eq!(err.source, ErrorSource::Data);
    assert_eq!(err.code, codes::SAVE_FAILED);
    assert_eq!(doc.error_state().get(), Some(&err));
}

#[test]
fn close_flushes_and_retires_the_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("story.quire");
    let mut doc = DocumentModel::new(&path, &EditorConfig::default());
    doc.close(true).unwrap();
    assert!(path.exists());
    assert!(doc.is_closed());
    assert!(!doc.is_ready());
    assert_eq!(doc.save().unwrap_err().code, codes::MODEL_NOT_READY);
    let err = doc.create_new_session(Instant::now()).unwrap_err();
    assert_eq!(err.code, codes::MODEL_NOT_READY);
}
