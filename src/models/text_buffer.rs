//! Rope-backed line store for the document body.
//!
//! Lines are separated by `\n` and the body never ends with one, so an empty
//! buffer still has exactly one (empty) line. Columns are char offsets.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Gets a `&str` out of a rope slice, copying only when the slice spans chunks.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Chars the rope would treat as line breaks are stored as spaces instead.
fn sanitize(ch: char) -> char {
    match ch {
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => ' ',
        other => other,
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(line.as_ref().chars().map(sanitize));
        }
        Self {
            rope: Rope::from_str(&text),
        }
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        if row >= self.len_lines() {
            return None;
        }
        let slice = self.rope.line(row);
        let len = slice.len_chars();
        let content = if len > 0 && slice.char(len - 1) == '\n' {
            slice.slice(..len - 1)
        } else {
            slice
        };
        Some(slice_to_cow(content))
    }

    /// Line length in chars, excluding the line break.
    pub fn line_len(&self, row: usize) -> Option<usize> {
        if row >= self.len_lines() {
            return None;
        }
        let slice = self.rope.line(row);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            Some(len - 1)
        } else {
            Some(len)
        }
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.len_lines())
            .filter_map(|row| self.line(row).map(Cow::into_owned))
            .collect()
    }

    fn char_index(&self, row: usize, col: usize) -> Option<usize> {
        let len = self.line_len(row)?;
        if col > len {
            return None;
        }
        Some(self.rope.line_to_char(row) + col)
    }

    /// Returns `false` when `(row, col)` is not a valid insertion point.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        let Some(idx) = self.char_index(row, col) else {
            return false;
        };
        self.rope.insert_char(idx, sanitize(ch));
        true
    }

    /// Replaces the char at `col`; appends when `col` is the end of the line.
    pub fn overwrite_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        let Some(len) = self.line_len(row) else {
            return false;
        };
        if col < len {
            let Some(idx) = self.char_index(row, col) else {
                return false;
            };
            self.rope.remove(idx..idx + 1);
            self.rope.insert_char(idx, sanitize(ch));
            true
        } else {
            self.insert_char(row, col, ch)
        }
    }

    /// Removes the char at `col`. Returns `false` at or past the end of the line.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        let Some(len) = self.line_len(row) else {
            return false;
        };
        if col >= len {
            return false;
        }
        let idx = self.rope.line_to_char(row) + col;
        self.rope.remove(idx..idx + 1);
        true
    }

    /// Breaks `row` at `col`; the tail becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) -> bool {
        let Some(idx) = self.char_index(row, col) else {
            return false;
        };
        self.rope.insert_char(idx, '\n');
        true
    }

    /// Appends line `row + 1` to `row`. Returns `false` on the last line.
    pub fn join_with_next(&mut self, row: usize) -> bool {
        if row + 1 >= self.len_lines() {
            return false;
        }
        let Some(len) = self.line_len(row) else {
            return false;
        };
        let idx = self.rope.line_to_char(row) + len;
        self.rope.remove(idx..idx + 1);
        true
    }

    /// Replaces chars `[start, end)` of `row` with `text`.
    pub fn replace_range(&mut self, row: usize, start: usize, end: usize, text: &str) -> bool {
        let Some(len) = self.line_len(row) else {
            return false;
        };
        if start > end || end > len {
            return false;
        }
        let base = self.rope.line_to_char(row);
        self.rope.remove(base + start..base + end);
        let clean: String = text.chars().map(sanitize).collect();
        self.rope.insert(base + start, &clean);
        true
    }

    pub fn word_count(&self) -> usize {
        self.rope
            .lines()
            .map(|line| slice_to_cow(line).split_whitespace().count())
            .sum()
    }
}

/// Word spans `(start, end)` in char offsets within `line`. Words follow the
/// Unicode word boundaries; runs without a letter (numbers) are skipped.
pub fn word_spans(line: &str) -> Vec<(usize, usize, String)> {
    let mut spans = Vec::new();
    let mut chars_before = 0;
    let mut byte_pos = 0;
    for (byte_start, word) in line.unicode_word_indices() {
        chars_before += line[byte_pos..byte_start].chars().count();
        let len = word.chars().count();
        byte_pos = byte_start + word.len();
        let start = chars_before;
        chars_before += len;
        if word.chars().any(char::is_alphabetic) {
            spans.push((start, start + len, word.to_string()));
        }
    }
    spans
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
