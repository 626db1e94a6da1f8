//! Drawing primitives shared by every view.
//!
//! Rows and columns passed to [`ViewBase`] are relative to the view's region.
//! Text that does not fit is cut and marked with an ellipsis, never wrapped.

use super::palette::ColourPair;
use crate::core::codes;
use crate::core::error::{EditorError, ErrorState};
use crate::core::geom::Rect;
use crate::core::text_window::{fit_and_pad, fit_to_width};
use crate::tui::console::{Colour, SharedConsole};
use std::io;
use unicode_width::UnicodeWidthChar;

pub struct ViewBase {
    name: &'static str,
    console: SharedConsole,
    region: Rect,
    colours: ColourPair,
    ready: bool,
    pub(super) error: ErrorState,
    lines: Vec<String>,
    repaints: usize,
}

impl ViewBase {
    pub fn new(name: &'static str, console: SharedConsole) -> Self {
        Self {
            name,
            console,
            region: Rect::default(),
            colours: (Colour::Reset, Colour::Reset),
            ready: false,
            error: ErrorState::None,
            lines: Vec::new(),
            repaints: 0,
        }
    }

    /// Binds the view to `region`; the view is ready afterwards.
    pub fn bind(&mut self, region: Rect, colours: ColourPair) {
        self.region = region;
        self.colours = colours;
        self.lines = vec![" ".repeat(region.width as usize); region.height as usize];
        self.ready = !region.is_empty();
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn width(&self) -> usize {
        self.region.width as usize
    }

    pub fn height(&self) -> usize {
        self.region.height as usize
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn rendered_lines(&self) -> &[String] {
        &self.lines
    }

    /// Row `row` as last drawn, without trailing blanks.
    pub fn line_text(&self, row: usize) -> &str {
        self.lines.get(row).map(|l| l.trim_end()).unwrap_or("")
    }

    pub fn repaint_count(&self) -> usize {
        self.repaints
    }

    pub fn begin_repaint(&mut self) {
        self.repaints += 1;
    }

    pub fn display_line(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        clear_first: bool,
    ) -> Result<(), EditorError> {
        self.display_styled(row, col, text, clear_first, self.colours)
    }

    /// Writes `word` at (`row`, `col`) in `colours` without clearing the rest
    /// of the row.
    pub fn display_word(
        &mut self,
        row: usize,
        col: usize,
        word: &str,
        colours: ColourPair,
    ) -> Result<(), EditorError> {
        self.display_styled(row, col, word, false, colours)
    }

    /// `clear_first` blanks the row from `col` to the region's right edge.
    pub fn display_styled(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        clear_first: bool,
        colours: ColourPair,
    ) -> Result<(), EditorError> {
        self.check_inside(row, col)?;
        let available = self.width() - col;
        let text = if clear_first {
            fit_and_pad(text, available)
        } else {
            fit_to_width(text, available).into_owned()
        };
        let top = self.region.top + row as u16;
        let left = self.region.left + col as u16;
        {
            let mut console = self.console.borrow_mut();
            console
                .set_colour(colours.0, colours.1)
                .and_then(|_| console.set_cursor_position(top, left))
                .and_then(|_| console.write(&text))
                .map_err(|err| console_error(self.name, err))?;
        }
        self.record(row, col, &text);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), EditorError> {
        for row in 0..self.height() {
            self.display_line(row, 0, "", true)?;
        }
        Ok(())
    }

    /// Moves the hardware cursor to (`row`, `col`) inside the region and shows it.
    pub fn park_cursor(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        self.check_inside(row, col)?;
        let mut console = self.console.borrow_mut();
        console
            .set_cursor_position(self.region.top + row as u16, self.region.left + col as u16)
            .and_then(|_| console.set_cursor_visible(true))
            .map_err(|err| console_error(self.name, err))
    }

    fn check_inside(&self, row: usize, col: usize) -> Result<(), EditorError> {
        if !self.ready {
            return Err(EditorError::program(
                codes::VIEW_NOT_SET_UP,
                format!("{} drew before setup", self.name),
            ));
        }
        if row >= self.height() || col >= self.width() {
            return Err(EditorError::program(
                codes::OUTSIDE_REGION,
                format!(
                    "{}: ({row}, {col}) is outside its {}x{} region",
                    self.name,
                    self.width(),
                    self.height()
                ),
            ));
        }
        Ok(())
    }

    /// Mirrors a write into `lines`, one entry per display cell.
    fn record(&mut self, row: usize, col: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let mut cells = to_cells(line);
        let mut at = col;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if at + w > cells.len() {
                break;
            }
            for cell in at..at + w {
                break_glyph(&mut cells, cell);
            }
            cells[at] = Some(ch);
            for tail in &mut cells[at + 1..at + w] {
                *tail = None;
            }
            at += w;
        }
        *line = cells.into_iter().flatten().collect();
    }
}

/// `None` marks the trailing cells of a wide char.
fn to_cells(line: &str) -> Vec<Option<char>> {
    let mut cells = Vec::with_capacity(line.len());
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        cells.push(Some(ch));
        cells.extend(std::iter::repeat(None).take(w - 1));
    }
    cells
}

/// Blanks whatever remains of a wide char that cell `at` is part of.
fn break_glyph(cells: &mut [Option<char>], at: usize) {
    let mut head = at;
    while head > 0 && cells[head].is_none() {
        head -= 1;
    }
    let mut end = head + 1;
    while end < cells.len() && cells[end].is_none() {
        end += 1;
    }
    if end - head > 1 {
        for cell in &mut cells[head..end] {
            *cell = Some(' ');
        }
    }
}

fn console_error(view: &str, err: io::Error) -> EditorError {
    EditorError::exception(codes::CONSOLE_FAILED, format!("{view}: console write failed: {err}"))
}

/// Column ruler starting at document column `left_col`:
/// `----+----1----+----2` with the tens digit every tenth column.
pub fn ruler(left_col: usize, width: usize) -> String {
    (left_col + 1..=left_col + width)
        .map(|col| {
            if col % 10 == 0 {
                char::from_digit(((col / 10) % 10) as u32, 10).unwrap_or('|')
            } else if col % 5 == 0 {
                '+'
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/views/canvas.rs"]
mod tests;
