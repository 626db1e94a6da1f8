//! Width-aware helpers for fitting text into fixed-width screen regions.
//!
//! Widths are terminal cells. Cut points always land on UTF-8 character boundaries.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended when text is cut to fit a region.
pub const ELLIPSIS: &str = "...";

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Fits `text` into `width` cells. Overlong text keeps its head and ends with
/// [`ELLIPSIS`]; it is never wrapped.
pub fn fit_to_width(text: &str, width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(text) <= width {
        return Cow::Borrowed(text);
    }
    let marker = ELLIPSIS.len();
    if width <= marker {
        return Cow::Owned(ELLIPSIS[..width].to_string());
    }
    let end = truncate_to_width(text, width - marker);
    let mut out = String::with_capacity(end + marker);
    out.push_str(&text[..end]);
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Fits `text` into `width` cells and pads the remainder with spaces.
pub fn fit_and_pad(text: &str, width: usize) -> String {
    let fitted = fit_to_width(text, width);
    let used = UnicodeWidthStr::width(fitted.as_ref());
    let mut out = String::with_capacity(fitted.len() + width.saturating_sub(used));
    out.push_str(&fitted);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Display cells taken by the first `char_col` chars of `line`, and the
/// width of the char at `char_col` (1 past the end of the line).
pub fn cell_span(line: &str, char_col: usize) -> (usize, usize) {
    let mut chars = line.chars();
    let start = chars
        .by_ref()
        .take(char_col)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum();
    let glyph = chars
        .next()
        .and_then(UnicodeWidthChar::width)
        .unwrap_or(1)
        .max(1);
    (start, glyph)
}

/// The part of `line` covering display cells `[left, left + width)`. A wide
/// char cut by either edge shows as blanks.
pub fn cell_slice(line: &str, left: usize, width: usize) -> String {
    let right = left + width;
    let mut out = String::new();
    let mut at = 0usize;
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        let (start, end) = (at, at + w);
        at = end;
        if start >= right {
            break;
        }
        if end <= left {
            continue;
        }
        if start < left {
            out.extend(std::iter::repeat(' ').take(end - left));
        } else if end > right {
            out.extend(std::iter::repeat(' ').take(right - start));
            break;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
