use super::*;

#[test]
fn next_cycles_through_every_mode() {
    let mut mode = Mode::Text;
    let mut seen = Vec::new();
    for _ in 0..Mode::ALL.len() {
        seen.push(mode);
        mode = transition(mode, ModeEvent::Next);
    }
    assert_eq!(mode, Mode::Text);
    assert_eq!(seen, Mode::ALL.to_vec());
}

#[test]
fn goto_ignores_current_mode() {
    for mode in Mode::ALL {
        assert_eq!(
            transition(mode, ModeEvent::Goto(Mode::Spelling)),
            Mode::Spelling
        );
    }
}

#[test]
fn names_parse_back() {
    for mode in Mode::ALL {
        assert_eq!(Mode::parse(mode.name()), Some(mode));
    }
    assert_eq!(Mode::parse(" Props "), Some(Mode::Properties));
    assert_eq!(Mode::parse("outline"), None);
}

#[test]
fn indices_are_dense() {
    let idx: Vec<usize> = Mode::ALL.iter().map(|m| m.index()).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}
