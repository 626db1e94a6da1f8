use super::*;

#[derive(Default)]
struct Slot {
    state: ErrorState,
}

impl ErrorReporter for Slot {
    fn error_state(&self) -> &ErrorState {
        &self.state
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.state
    }
}

#[test]
fn first_error_wins() {
    let mut state = ErrorState::default();
    assert!(state.set(EditorError::user(1, "first")));
    assert!(!state.set(EditorError::program(2, "second")));
    assert_eq!(state.get().map(|e| e.code), Some(1));

    state.reset();
    assert!(!state.is_active());
    assert!(state.set(EditorError::program(2, "second")));
}

#[test]
fn critical_only_ignores_user_errors() {
    let mut state = ErrorState::default();
    state.set(EditorError::user(1, "at start of line"));
    assert!(state.is_error(false));
    assert!(!state.is_error(true));

    let mut state = ErrorState::default();
    state.set(EditorError::data(7, "bad file", "cannot read file"));
    assert!(state.is_error(true));
}

#[test]
fn source_classification() {
    assert!(ErrorSource::Exception.is_fatal());
    for source in [
        ErrorSource::User,
        ErrorSource::Param,
        ErrorSource::Program,
        ErrorSource::Data,
    ] {
        assert!(!source.is_fatal());
    }
    assert!(!ErrorSource::User.is_critical());
    assert!(ErrorSource::Param.is_critical());
}

#[test]
fn message_line_format() {
    let err = EditorError::user(1101, "cursor is already at the start of the line");
    assert_eq!(
        err.message_line(),
        "Warning 1101: cursor is already at the start of the line"
    );

    let err = EditorError::exception(9000, "panic in dispatch");
    assert_eq!(err.message_line(), "Fatal 9000: panic in dispatch");
}

#[test]
fn reporter_latches_once() {
    let mut slot = Slot::default();
    assert!(!slot.has_error());
    assert!(slot.report(EditorError::user(1, "a")));
    assert!(!slot.report(EditorError::user(2, "b")));
    assert_eq!(slot.error_state().get().map(|e| e.code), Some(1));
}
