//! In-memory console for tests: a grid of display cells, a cursor and a
//! queue of scripted keys.

use super::console::{Colour, Console, ConsoleSettings, CursorShape};
use crate::core::event::{KeyCode, KeyEvent};
use std::collections::VecDeque;
use std::io;
use unicode_width::UnicodeWidthChar;

/// Fills the cells a wide char spills into.
const WIDE_TAIL: char = '\0';

#[derive(Debug)]
pub struct HeadlessConsole {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    cursor: (u16, u16),
    cursor_visible: bool,
    cursor_shape: CursorShape,
    colour: (Colour, Colour),
    settings: ConsoleSettings,
    keys: VecDeque<KeyEvent>,
    fail_writes: bool,
    applied: usize,
    closed: bool,
}

impl HeadlessConsole {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: blank(width, height),
            cursor: (0, 0),
            cursor_visible: true,
            cursor_shape: CursorShape::default(),
            colour: (Colour::Reset, Colour::Reset),
            settings: ConsoleSettings::default(),
            keys: VecDeque::new(),
            fail_writes: false,
            applied: 0,
            closed: false,
        }
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn push_keys<I: IntoIterator<Item = KeyEvent>>(&mut self, keys: I) {
        self.keys.extend(keys);
    }

    /// Queues one plain key per char; `'\n'` becomes Enter.
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            let key = match ch {
                '\n' => KeyEvent::plain(KeyCode::Enter),
                ch => KeyEvent::char(ch),
            };
            self.keys.push_back(key);
        }
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Simulates the user resizing the window. The grid keeps its contents
    /// where they still fit.
    pub fn resize(&mut self, width: u16, height: u16) {
        let mut cells = blank(width, height);
        for (row, line) in self.cells.iter().enumerate().take(height as usize) {
            for (col, ch) in line.iter().enumerate().take(width as usize) {
                cells[row][col] = *ch;
            }
        }
        self.cells = cells;
        self.width = width;
        self.height = height;
    }

    /// Makes every subsequent write fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|line| {
                line.iter()
                    .filter(|ch| **ch != WIDE_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    pub fn screen(&self) -> Vec<String> {
        (0..self.height).map(|row| self.row_text(row)).collect()
    }

    /// (row, col)
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    pub fn colour(&self) -> (Colour, Colour) {
        self.colour
    }

    /// How many times settings were applied.
    pub fn applied_count(&self) -> usize {
        self.applied
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn check_open(&self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        Ok(())
    }
}

impl Console for HeadlessConsole {
    fn apply_settings(&mut self, settings: &ConsoleSettings) -> io::Result<()> {
        self.check_open()?;
        self.settings = settings.clone();
        self.colour = (settings.foreground, settings.background);
        self.cells = blank(self.width, self.height);
        self.applied += 1;
        Ok(())
    }

    fn settings(&self) -> ConsoleSettings {
        self.settings.clone()
    }

    fn window_size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn set_cursor_position(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.check_open()?;
        if row >= self.height || col >= self.width {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("({row}, {col}) is off screen"),
            ));
        }
        self.cursor = (row, col);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.check_open()?;
        self.cursor_visible = visible;
        Ok(())
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) -> io::Result<()> {
        self.check_open()?;
        self.cursor_shape = shape;
        Ok(())
    }

    fn set_colour(&mut self, fg: Colour, bg: Colour) -> io::Result<()> {
        self.check_open()?;
        self.colour = (fg, bg);
        Ok(())
    }

    /// Text past the right edge is clipped.
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.check_open()?;
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "write failed"));
        }
        let (row, mut col) = self.cursor;
        let Some(line) = self.cells.get_mut(row as usize) else {
            return Ok(());
        };
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            line[col as usize] = ch;
            for tail in col + 1..col + w {
                line[tail as usize] = WIDE_TAIL;
            }
            col += w;
        }
        self.cursor = (row, col.min(self.width.saturating_sub(1)));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check_open()
    }

    fn is_key_available(&mut self) -> io::Result<bool> {
        Ok(!self.keys.is_empty())
    }

    /// A blocking read with nothing queued returns `Ok(None)` rather than hanging.
    fn read_key(&mut self, _blocking: bool) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

fn blank(width: u16, height: u16) -> Vec<Vec<char>> {
    vec![vec![' '; width as usize]; height as usize]
}

#[cfg(test)]
#[path = "../../tests/unit/tui/headless.rs"]
mod tests;
