use super::*;
use crate::core::codes;
use crate::services::config::EditorConfig;
use crate::tui::console::shared;
use crate::tui::HeadlessConsole;
use crate::views::{shared_view, LineRole, LineView};

fn setup() -> (Controller, DocumentModel) {
    let config = EditorConfig::default();
    let mut doc = DocumentModel::new("errors.quire", &config);
    let ctl = Controller::create("text", &mut doc, &config).unwrap();
    (ctl, doc)
}

fn warning() -> EditorError {
    EditorError::user(codes::AT_LINE_START, "already at the start of the line")
}

#[test]
fn nothing_latched_means_nothing_shown() {
    let (mut ctl, mut doc) = setup();
    let mut errors = ErrorProcessor::new();
    assert_eq!(errors.process(&mut ctl, &mut doc), ErrorVerdict::Continue);
    assert!(!errors.is_displaying());
    assert_eq!(doc.msg_line(), "");
}

#[test]
fn user_error_is_shown_until_acknowledged() {
    let (mut ctl, mut doc) = setup();
    let mut errors = ErrorProcessor::new();
    ctl.report(warning());
    assert_eq!(errors.process(&mut ctl, &mut doc), ErrorVerdict::Continue);
    assert_eq!(doc.msg_line(), "Warning 1001: already at the start of the line");
    assert!(errors.is_displaying());

    // Still displayed on the next pass without a key.
    errors.process(&mut ctl, &mut doc);
    assert!(ctl.has_error());

    assert!(errors.acknowledge());
    assert!(!errors.acknowledge());
    errors.process(&mut ctl, &mut doc);
    assert!(!ctl.has_error());
    assert_eq!(doc.msg_line(), "");
    assert!(!errors.is_displaying());
}

#[test]
fn controller_error_wins_over_model_and_views() {
    let (mut ctl, mut doc) = setup();
    let (_console, console) = shared(HeadlessConsole::new(80, 30));
    let (line, view) = shared_view(LineView::new(LineRole::Status, console));
    doc.subscribe(view);
    line.borrow_mut()
        .report(EditorError::program(codes::OUTSIDE_REGION, "view"));
    doc.report(EditorError::data(codes::SAVE_FAILED, "disk", "cannot save"));
    ctl.report(warning());

    let mut errors = ErrorProcessor::new();
    errors.process(&mut ctl, &mut doc);
    assert!(doc.msg_line().starts_with("Warning 1001"));

    errors.acknowledge();
    errors.process(&mut ctl, &mut doc);
    assert!(!doc.has_error());
    assert!(!line.borrow().has_error());
}

#[test]
fn model_error_is_copied_onto_the_controller() {
    let (mut ctl, mut doc) = setup();
    doc.report(EditorError::data(codes::SAVE_FAILED, "disk full", "cannot save"));
    let mut errors = ErrorProcessor::new();
    errors.process(&mut ctl, &mut doc);
    assert_eq!(ctl.error_state().get().unwrap().code, codes::SAVE_FAILED);
    assert_eq!(doc.msg_line(), "Error 4001: disk full");
}

#[test]
fn view_error_is_found_when_nothing_else_is_latched() {
    let (mut ctl, mut doc) = setup();
    let (_console, console) = shared(HeadlessConsole::new(80, 30));
    let (line, view) = shared_view(LineView::new(LineRole::Help, console));
    doc.subscribe(view);
    line.borrow_mut()
        .report(EditorError::program(codes::OUTSIDE_REGION, "help: (3, 0)"));
    let mut errors = ErrorProcessor::new();
    assert_eq!(errors.process(&mut ctl, &mut doc), ErrorVerdict::Continue);
    assert_eq!(ctl.error_state().get().unwrap().code, codes::OUTSIDE_REGION);
}

#[test]
fn exceptions_stop_the_loop() {
    let (mut ctl, mut doc) = setup();
    let fatal = EditorError::exception(codes::CONSOLE_FAILED, "console: broken pipe");
    ctl.report(fatal.clone());
    let mut errors = ErrorProcessor::new();
    assert_eq!(errors.process(&mut ctl, &mut doc), ErrorVerdict::Stop(fatal));
    assert!(doc.msg_line().starts_with("Fatal 5001"));
}

#[test]
fn error_replaces_a_plain_message() {
    let (mut ctl, mut doc) = setup();
    let mut errors = ErrorProcessor::new();
    doc.set_msg_line("Saved errors.quire");
    assert_eq!(errors.process(&mut ctl, &mut doc), ErrorVerdict::Continue);
    assert_eq!(doc.msg_line(), "Saved errors.quire");
    assert!(!errors.is_displaying());

    doc.report(warning());
    errors.process(&mut ctl, &mut doc);
    assert_eq!(doc.msg_line(), "Warning 1001: already at the start of the line");
    assert!(errors.is_displaying());
}
