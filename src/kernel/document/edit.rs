//! Body text editing and cursor movement.
//!
//! Boundary conditions are `User` errors: the cursor stays put and nothing is
//! notified. The caller decides where the error is latched.

use super::DocumentModel;
use crate::core::codes;
use crate::core::error::EditorError;
use crate::core::geom::CursorPosition;
use crate::kernel::notify::ChangeKind;

impl DocumentModel {
    /// Types `ch` at the cursor, inserting or overwriting.
    pub fn insert_char(&mut self, ch: char, insert_mode: bool) -> Result<(), EditorError> {
        let CursorPosition { row, col } = self.cursor;
        let done = if insert_mode {
            self.buffer.insert_char(row, col, ch)
        } else {
            self.buffer.overwrite_char(row, col, ch)
        };
        if !done {
            return Err(invalid_cursor(self.cursor));
        }
        self.cursor.col += 1;
        self.modified = true;
        self.notify(ChangeKind::Line);
        Ok(())
    }

    pub fn insert_str(&mut self, text: &str, insert_mode: bool) -> Result<(), EditorError> {
        for ch in text.chars() {
            self.insert_char(ch, insert_mode)?;
        }
        Ok(())
    }

    /// Breaks the line at the cursor; the cursor moves to the start of the new line.
    pub fn split_line(&mut self) -> Result<(), EditorError> {
        let CursorPosition { row, col } = self.cursor;
        if !self.buffer.split_line(row, col) {
            return Err(invalid_cursor(self.cursor));
        }
        self.cursor = CursorPosition::new(row + 1, 0);
        self.modified = true;
        self.notify(ChangeKind::End);
        Ok(())
    }

    /// Backspace. At column 0 the line is joined onto the previous one.
    pub fn delete_backward(&mut self) -> Result<(), EditorError> {
        let CursorPosition { row, col } = self.cursor;
        if col > 0 {
            if !self.buffer.delete_char(row, col - 1) {
                return Err(invalid_cursor(self.cursor));
            }
            self.cursor.col -= 1;
            self.modified = true;
            self.notify(ChangeKind::Line);
            return Ok(());
        }
        if row == 0 {
            return Err(EditorError::user(
                codes::AT_DOCUMENT_START,
                "already at the start of the document",
            ));
        }
        let prev_len = self.line_len(row - 1);
        if !self.buffer.join_with_next(row - 1) {
            return Err(invalid_cursor(self.cursor));
        }
        self.cursor = CursorPosition::new(row - 1, prev_len);
        self.modified = true;
        self.notify(ChangeKind::End);
        Ok(())
    }

    /// Delete. At the end of a line the next line is joined onto it.
    pub fn delete_forward(&mut self) -> Result<(), EditorError> {
        let CursorPosition { row, col } = self.cursor;
        if col < self.line_len(row) {
            if !self.buffer.delete_char(row, col) {
                return Err(invalid_cursor(self.cursor));
            }
            self.modified = true;
            self.notify(ChangeKind::Line);
            return Ok(());
        }
        if row + 1 >= self.buffer.len_lines() {
            return Err(EditorError::user(
                codes::AT_DOCUMENT_END,
                "already at the end of the document",
            ));
        }
        if !self.buffer.join_with_next(row) {
            return Err(invalid_cursor(self.cursor));
        }
        self.modified = true;
        self.notify(ChangeKind::End);
        Ok(())
    }

    pub fn cursor_left(&mut self) -> Result<(), EditorError> {
        if self.cursor.col == 0 {
            return Err(EditorError::user(
                codes::AT_LINE_START,
                "already at the start of the line",
            ));
        }
        self.cursor.col -= 1;
        self.cursor_moved();
        Ok(())
    }

    pub fn cursor_right(&mut self) -> Result<(), EditorError> {
        if self.cursor.col >= self.line_len(self.cursor.row) {
            return Err(EditorError::user(
                codes::AT_LINE_END,
                "already at the end of the line",
            ));
        }
        self.cursor.col += 1;
        self.cursor_moved();
        Ok(())
    }

    pub fn cursor_up(&mut self) -> Result<(), EditorError> {
        self.cursor_to_row(self.cursor.row.checked_sub(1), codes::AT_FIRST_LINE)
    }

    pub fn cursor_down(&mut self) -> Result<(), EditorError> {
        let next = self.cursor.row + 1;
        let target = (next < self.buffer.len_lines()).then_some(next);
        self.cursor_to_row(target, codes::AT_LAST_LINE)
    }

    pub fn cursor_line_start(&mut self) -> Result<(), EditorError> {
        if self.cursor.col == 0 {
            return Err(EditorError::user(
                codes::AT_LINE_START,
                "already at the start of the line",
            ));
        }
        self.cursor.col = 0;
        self.cursor_moved();
        Ok(())
    }

    pub fn cursor_line_end(&mut self) -> Result<(), EditorError> {
        let len = self.line_len(self.cursor.row);
        if self.cursor.col >= len {
            return Err(EditorError::user(
                codes::AT_LINE_END,
                "already at the end of the line",
            ));
        }
        self.cursor.col = len;
        self.cursor_moved();
        Ok(())
    }

    pub fn cursor_file_start(&mut self) -> Result<(), EditorError> {
        if self.cursor == CursorPosition::default() {
            return Err(EditorError::user(
                codes::AT_DOCUMENT_START,
                "already at the start of the document",
            ));
        }
        self.cursor = CursorPosition::default();
        self.cursor_moved();
        Ok(())
    }

    pub fn cursor_file_end(&mut self) -> Result<(), EditorError> {
        let last = self.buffer.len_lines().saturating_sub(1);
        let end = CursorPosition::new(last, self.line_len(last));
        if self.cursor == end {
            return Err(EditorError::user(
                codes::AT_DOCUMENT_END,
                "already at the end of the document",
            ));
        }
        self.cursor = end;
        self.cursor_moved();
        Ok(())
    }

    pub fn page_up(&mut self, rows: usize) -> Result<(), EditorError> {
        let target = match self.cursor.row {
            0 => None,
            row => Some(row.saturating_sub(rows.max(1))),
        };
        self.cursor_to_row(target, codes::AT_FIRST_LINE)
    }

    pub fn page_down(&mut self, rows: usize) -> Result<(), EditorError> {
        let last = self.buffer.len_lines().saturating_sub(1);
        let target = (self.cursor.row < last).then(|| (self.cursor.row + rows.max(1)).min(last));
        self.cursor_to_row(target, codes::AT_LAST_LINE)
    }

    /// Places the cursor anywhere valid in the body.
    pub fn set_cursor(&mut self, pos: CursorPosition) -> Result<(), EditorError> {
        match self.buffer.line_len(pos.row) {
            Some(len) if pos.col <= len => {
                self.cursor = pos;
                self.cursor_moved();
                Ok(())
            }
            _ => Err(EditorError::param(
                codes::INVALID_CURSOR,
                format!("cursor {pos:?} is outside the document"),
            )),
        }
    }

    pub(super) fn line_len(&self, row: usize) -> usize {
        self.buffer.line_len(row).unwrap_or(0)
    }

    fn cursor_to_row(&mut self, row: Option<usize>, code: u32) -> Result<(), EditorError> {
        let Some(row) = row else {
            let message = if code == codes::AT_FIRST_LINE {
                "already on the first line"
            } else {
                "already on the last line"
            };
            return Err(EditorError::user(code, message));
        };
        self.cursor.row = row;
        self.cursor.col = self.cursor.col.min(self.line_len(row));
        self.cursor_moved();
        Ok(())
    }

    fn cursor_moved(&mut self) {
        self.notify(ChangeKind::Cursor);
    }
}

fn invalid_cursor(pos: CursorPosition) -> EditorError {
    EditorError::program(
        codes::INVALID_CURSOR,
        format!("cursor {pos:?} is not a valid edit position"),
    )
}
