//! Document space ↔ viewport space.
//!
//! A viewport is the window of the document a view shows: `height` lines from
//! `top_line`, `width` columns from `left_col`. Columns here are display
//! cells; views convert the document's char columns with
//! [`cell_span`](crate::core::text_window::cell_span) first. Translations that
//! land outside the window are programming errors, never wrapped or clamped.

use crate::core::codes;
use crate::core::error::EditorError;
use crate::core::geom::CursorPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top_line: usize,
    pub left_col: usize,
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            top_line: 0,
            left_col: 0,
            height,
            width,
        }
    }

    /// `pos` is in document space.
    pub fn contains(&self, pos: CursorPosition) -> bool {
        pos.row >= self.top_line
            && pos.row < self.top_line + self.height
            && pos.col >= self.left_col
            && pos.col < self.left_col + self.width
    }

    pub fn to_viewport(&self, pos: CursorPosition) -> Result<CursorPosition, EditorError> {
        if !self.contains(pos) {
            return Err(self.outside("document", pos));
        }
        Ok(CursorPosition::new(
            pos.row - self.top_line,
            pos.col - self.left_col,
        ))
    }

    pub fn to_document(&self, pos: CursorPosition) -> Result<CursorPosition, EditorError> {
        if pos.row >= self.height || pos.col >= self.width {
            return Err(self.outside("viewport", pos));
        }
        Ok(CursorPosition::new(
            pos.row + self.top_line,
            pos.col + self.left_col,
        ))
    }

    /// Scrolls just enough to bring `cursor` into view. Returns whether the
    /// window moved.
    pub fn follow(&mut self, cursor: CursorPosition, total_lines: usize) -> bool {
        self.follow_span(cursor, 1, total_lines)
    }

    /// Like [`follow`](Self::follow), keeping `span` cells from the cursor
    /// column visible so a wide glyph under the cursor is never cut.
    pub fn follow_span(&mut self, cursor: CursorPosition, span: usize, total_lines: usize) -> bool {
        let before = (self.top_line, self.left_col);
        let height = self.height.max(1);
        let width = self.width.max(1);

        let max_top = total_lines.max(1).saturating_sub(height);
        self.top_line = self.top_line.min(max_top);

        if cursor.row < self.top_line {
            self.top_line = cursor.row;
        } else if cursor.row >= self.top_line + height {
            self.top_line = cursor.row + 1 - height;
        }

        if cursor.col < self.left_col {
            self.left_col = cursor.col;
        } else if cursor.col + span.clamp(1, width) > self.left_col + width {
            self.left_col = cursor.col + span.clamp(1, width) - width;
        }

        before != (self.top_line, self.left_col)
    }

    /// Document rows currently visible.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.top_line..self.top_line + self.height
    }

    fn outside(&self, space: &str, pos: CursorPosition) -> EditorError {
        EditorError::program(
            codes::OUTSIDE_VIEWPORT,
            format!(
                "{space} position ({}, {}) is outside the {}x{} viewport at ({}, {})",
                pos.row, pos.col, self.height, self.width, self.top_line, self.left_col
            ),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/viewport.rs"]
mod tests;
