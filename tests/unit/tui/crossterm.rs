use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = event::KeyEvent::new(event::KeyCode::Null, event::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn insert_key_is_mapped() {
    let event = event::KeyEvent::new(event::KeyCode::Insert, event::KeyModifiers::NONE);
    assert_eq!(into_key_event(event).code, KeyCode::Insert);
}

#[test]
fn ctrl_s_keeps_its_modifier() {
    let event = event::KeyEvent::new(event::KeyCode::Char('s'), event::KeyModifiers::CONTROL);
    let converted = into_key_event(event);
    assert_eq!(converted, KeyEvent::ctrl('s'));
}

#[test]
fn release_events_are_not_key_presses() {
    let mut key = event::KeyEvent::new(event::KeyCode::Char('a'), event::KeyModifiers::NONE);
    key.kind = event::KeyEventKind::Release;
    assert_eq!(key_press(event::Event::Key(key)), None);
    assert_eq!(key_press(event::Event::Resize(80, 24)), None);

    key.kind = event::KeyEventKind::Press;
    assert_eq!(key_press(event::Event::Key(key)), Some(KeyEvent::char('a')));
}

#[test]
fn colours_map_one_to_one() {
    assert_eq!(into_color(Colour::Reset), style::Color::Reset);
    assert_eq!(into_color(Colour::DarkGrey), style::Color::DarkGrey);
    assert_eq!(into_color(Colour::Magenta), style::Color::Magenta);
}
