use super::*;
use crate::core::error::ErrorSource;
use crate::tui::console::{shared, Console};
use crate::tui::HeadlessConsole;
use std::cell::RefCell;
use std::rc::Rc;

fn bound(region: Rect) -> (Rc<RefCell<HeadlessConsole>>, ViewBase) {
    let (console, shared) = shared(HeadlessConsole::new(30, 10));
    let mut base = ViewBase::new("probe", shared);
    base.bind(region, (Colour::Grey, Colour::Black));
    (console, base)
}

#[test]
fn drawing_is_relative_to_the_region() {
    let (console, mut base) = bound(Rect::new(2, 3, 10, 2));
    base.display_line(1, 2, "hi", true).unwrap();
    assert_eq!(console.borrow().row_text(3), "     hi");
    assert_eq!(base.line_text(1), "  hi");
    assert_eq!(base.line_text(0), "");
}

#[test]
fn overlong_text_is_cut_with_an_ellipsis() {
    let (console, mut base) = bound(Rect::new(0, 0, 8, 1));
    base.display_line(0, 0, "hello world", true).unwrap();
    assert_eq!(console.borrow().row_text(0), "hello...");
}

#[test]
fn display_word_keeps_the_rest_of_the_row() {
    let (console, mut base) = bound(Rect::new(0, 0, 10, 1));
    base.display_line(0, 0, "abcdefgh", true).unwrap();
    base.display_word(0, 2, "XY", (Colour::Black, Colour::Yellow)).unwrap();
    assert_eq!(base.line_text(0), "abXYefgh");
    assert_eq!(console.borrow().colour(), (Colour::Black, Colour::Yellow));
}

#[test]
fn wide_chars_take_two_cells() {
    let (console, mut base) = bound(Rect::new(0, 0, 10, 1));
    base.display_line(0, 0, "中文ab", true).unwrap();
    assert_eq!(base.line_text(0), "中文ab");
    assert_eq!(console.borrow().row_text(0), "中文ab");
    base.display_word(0, 4, "XY", (Colour::Grey, Colour::Black)).unwrap();
    assert_eq!(base.line_text(0), "中文XY");
    // Overwriting half of a wide char blanks the other half.
    base.display_word(0, 1, "Z", (Colour::Grey, Colour::Black)).unwrap();
    assert_eq!(base.line_text(0), " Z文XY");
}

#[test]
fn drawing_outside_the_region_is_a_program_error() {
    let (_console, mut base) = bound(Rect::new(0, 0, 10, 2));
    let err = base.display_line(2, 0, "x", true).unwrap_err();
    assert_eq!(err.source, ErrorSource::Program);
    assert_eq!(err.code, codes::OUTSIDE_REGION);
    assert!(base.park_cursor(0, 10).is_err());
}

#[test]
fn drawing_before_bind_is_rejected() {
    let (_console, shared) = shared(HeadlessConsole::new(10, 2));
    let mut base = ViewBase::new("early", shared);
    assert!(!base.is_ready());
    let err = base.display_line(0, 0, "x", true).unwrap_err();
    assert_eq!(err.code, codes::VIEW_NOT_SET_UP);
}

#[test]
fn console_failures_become_exceptions() {
    let (console, mut base) = bound(Rect::new(0, 0, 10, 1));
    console.borrow_mut().set_fail_writes(true);
    let err = base.display_line(0, 0, "x", true).unwrap_err();
    assert_eq!(err.source, ErrorSource::Exception);
    assert_eq!(err.code, codes::CONSOLE_FAILED);
}

#[test]
fn park_cursor_moves_the_hardware_cursor() {
    let (console, mut base) = bound(Rect::new(4, 1, 10, 3));
    console.borrow_mut().set_cursor_visible(false).unwrap();
    base.park_cursor(2, 5).unwrap();
    assert_eq!(console.borrow().cursor(), (6, 6));
    assert!(console.borrow().cursor_visible());
}

#[test]
fn ruler_marks_fives_and_tens() {
    assert_eq!(ruler(0, 12), "----+----1--");
    assert_eq!(ruler(95, 6), "----0-");
}
