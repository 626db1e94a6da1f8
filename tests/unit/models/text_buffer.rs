use super::*;

#[test]
fn test_empty_buffer_has_one_line() {
    let buffer = TextBuffer::new();
    assert_eq!(buffer.len_lines(), 1);
    assert_eq!(buffer.line_len(0), Some(0));
    assert_eq!(buffer.line(0).as_deref(), Some(""));
    assert_eq!(buffer.line(1), None);
    assert!(buffer.is_empty());
}

#[test]
fn test_from_lines_round_trips() {
    let buffer = TextBuffer::from_lines(["hello", "", "world"]);
    assert_eq!(buffer.len_lines(), 3);
    assert_eq!(buffer.lines(), vec!["hello", "", "world"]);
    assert_eq!(buffer.line_len(2), Some(5));
}

#[test]
fn test_line_breaks_inside_lines_are_sanitized() {
    let buffer = TextBuffer::from_lines(["a\rb", "c\u{2028}d"]);
    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.lines(), vec!["a b", "c d"]);
}

#[test]
fn test_insert_and_overwrite() {
    let mut buffer = TextBuffer::from_lines(["ac"]);
    assert!(buffer.insert_char(0, 1, 'b'));
    assert_eq!(buffer.line(0).as_deref(), Some("abc"));

    assert!(buffer.overwrite_char(0, 0, 'x'));
    assert_eq!(buffer.line(0).as_deref(), Some("xbc"));

    assert!(buffer.overwrite_char(0, 3, 'd'));
    assert_eq!(buffer.line(0).as_deref(), Some("xbcd"));

    assert!(!buffer.insert_char(0, 9, 'z'));
    assert!(!buffer.insert_char(4, 0, 'z'));
}

#[test]
fn test_delete_char() {
    let mut buffer = TextBuffer::from_lines(["abc", "d"]);
    assert!(buffer.delete_char(0, 1));
    assert_eq!(buffer.lines(), vec!["ac", "d"]);
    assert!(!buffer.delete_char(0, 2));
    assert_eq!(buffer.lines(), vec!["ac", "d"]);
}

#[test]
fn test_split_and_join() {
    let mut buffer = TextBuffer::from_lines(["hello world"]);
    assert!(buffer.split_line(0, 5));
    assert_eq!(buffer.lines(), vec!["hello", " world"]);

    assert!(buffer.join_with_next(0));
    assert_eq!(buffer.lines(), vec!["hello world"]);
    assert!(!buffer.join_with_next(0));
}

#[test]
fn test_split_at_end_adds_empty_line() {
    let mut buffer = TextBuffer::from_lines(["abc"]);
    assert!(buffer.split_line(0, 3));
    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.line(1).as_deref(), Some(""));
}

#[test]
fn test_replace_range() {
    let mut buffer = TextBuffer::from_lines(["the wrold turns"]);
    assert!(buffer.replace_range(0, 4, 9, "world"));
    assert_eq!(buffer.line(0).as_deref(), Some("the world turns"));
    assert!(!buffer.replace_range(0, 9, 4, "x"));
    assert!(!buffer.replace_range(0, 0, 99, "x"));
}

#[test]
fn test_word_count() {
    let buffer = TextBuffer::from_lines(["one two", "", "  three  "]);
    assert_eq!(buffer.word_count(), 3);
    assert_eq!(TextBuffer::new().word_count(), 0);
}

#[test]
fn test_word_spans() {
    let spans = word_spans("It's a dog's-life, 42 times");
    let words: Vec<&str> = spans.iter().map(|(_, _, w)| w.as_str()).collect();
    assert_eq!(words, vec!["It's", "a", "dog's", "life", "times"]);
    assert_eq!((spans[0].0, spans[0].1), (0, 4));
    assert_eq!((spans[4].0, spans[4].1), (22, 27));
}
