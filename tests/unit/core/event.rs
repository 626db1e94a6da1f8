use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event_normalises_uppercase() {
    let key: Key = KeyEvent::char('Q').into();
    assert_eq!(key.code, KeyCode::Char('q'));
    assert_eq!(key.modifiers, KeyModifiers::SHIFT);
}

#[test]
fn test_modifier_set_operations() {
    let mut mods = KeyModifiers::CONTROL;
    mods |= KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(mods.is_chord());
    assert!(!KeyModifiers::SHIFT.is_chord());
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn test_text_char_filters_chords_and_controls() {
    assert_eq!(KeyEvent::char('a').text_char(), Some('a'));
    assert_eq!(
        KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).text_char(),
        Some('A')
    );
    assert_eq!(KeyEvent::ctrl('s').text_char(), None);
    assert_eq!(KeyEvent::char('\u{7}').text_char(), None);
    assert_eq!(KeyEvent::plain(KeyCode::Enter).text_char(), None);
}
