use super::*;

#[test]
fn truncate_to_width_does_not_split_utf8() {
    let text = "éé";
    let end = truncate_to_width(text, 1);
    assert_eq!(end, "é".len());
    assert!(text.is_char_boundary(end));
    assert_eq!(&text[..end], "é");
}

#[test]
fn truncate_to_width_respects_wide_chars() {
    let text = "你好世界";
    let end = truncate_to_width(text, 5);
    assert_eq!(&text[..end], "你好");
}

#[test]
fn fit_keeps_short_text_borrowed() {
    let fitted = fit_to_width("hello", 10);
    assert!(matches!(fitted, Cow::Borrowed("hello")));
    assert_eq!(fit_to_width("hello", 5), "hello");
}

#[test]
fn fit_marks_overlong_text_with_ellipsis() {
    assert_eq!(fit_to_width("hello world", 8), "hello...");
    assert_eq!(fit_to_width("hello world", 3), "...");
    assert_eq!(fit_to_width("hello world", 2), "..");
    assert_eq!(fit_to_width("hello world", 0), "");
}

#[test]
fn fit_and_pad_fills_the_region() {
    assert_eq!(fit_and_pad("ab", 5), "ab   ");
    assert_eq!(fit_and_pad("abcdefgh", 6), "abc...");
    assert_eq!(fit_and_pad("", 3), "   ");
}

#[test]
fn cell_span_counts_display_cells() {
    assert_eq!(cell_span("hello", 3), (3, 1));
    assert_eq!(cell_span("hello", 5), (5, 1));
    assert_eq!(cell_span("中文ab", 1), (2, 2));
    assert_eq!(cell_span("中文ab", 2), (4, 1));
    assert_eq!(cell_span("中文ab", 9), (6, 1));
}

#[test]
fn cell_slice_by_display_cells() {
    assert_eq!(cell_slice("hello", 1, 3), "ell");
    assert_eq!(cell_slice("hello", 3, 10), "lo");
    assert_eq!(cell_slice("hello", 9, 2), "");
    assert_eq!(cell_slice("héllo", 1, 2), "él");
    assert_eq!(cell_slice("hello", 2, 0), "");
    assert_eq!(cell_slice("中文中文", 2, 4), "文中");
}

#[test]
fn cell_slice_blanks_wide_chars_cut_by_an_edge() {
    assert_eq!(cell_slice("中文中文", 1, 4), " 文 ");
    assert_eq!(cell_slice("a中b", 0, 2), "a ");
    assert_eq!(cell_slice("a中b", 2, 2), " b");
}
