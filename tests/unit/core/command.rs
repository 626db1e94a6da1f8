use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::CursorLeft.name(), "cursorLeft");
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::SpellReplace(3).name(), "spellReplace");
}

#[test]
fn test_from_name_round_trips_plain_commands() {
    for cmd in [
        Command::Quit,
        Command::Save,
        Command::NextMode,
        Command::CursorFileEnd,
        Command::DeleteForward,
        Command::SpellIgnore,
    ] {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd));
    }
}

#[test]
fn test_from_name_spell_replace() {
    assert_eq!(
        Command::from_name("spellReplace:4"),
        Some(Command::SpellReplace(4))
    );
    assert_eq!(Command::from_name("spellReplace:0"), None);
    assert_eq!(Command::from_name("spellReplace:x"), None);
    assert_eq!(Command::from_name("bogus"), None);
}

#[test]
fn test_command_classes() {
    assert!(Command::Quit.is_universal());
    assert!(Command::NextMode.is_universal());
    assert!(!Command::CursorLeft.is_universal());
    assert!(Command::PageDown.is_cursor_command());
    assert!(!Command::InsertNewline.is_cursor_command());
    assert!(Command::DeleteBackward.is_edit_command());
    assert!(!Command::Save.is_edit_command());
}
