use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(20, 10, 3, 2); // rows 20..22, cols 10..13
    assert!(r.contains(20, 10));
    assert!(r.contains(21, 12));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(20, 13));
    assert!(!r.contains(22, 12));

    // Outside.
    assert!(!r.contains(20, 9));
    assert!(!r.contains(19, 10));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(0, 0));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(0, 0));
}

#[test]
fn rect_overlap() {
    let status = Rect::new(0, 0, 80, 1);
    let edit = Rect::new(2, 1, 68, 20);
    assert!(!status.overlaps(&edit));
    assert!(edit.overlaps(&Rect::new(21, 0, 80, 1)));
    assert!(!edit.overlaps(&Rect::new(22, 0, 80, 1)));
}

#[test]
fn cursor_positions_order_by_row_then_col() {
    assert!(CursorPosition::new(0, 9) < CursorPosition::new(1, 0));
    assert!(CursorPosition::new(2, 1) < CursorPosition::new(2, 3));
}
