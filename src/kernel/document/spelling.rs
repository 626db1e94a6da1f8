//! Spelling correction: walk the body for unknown words and fix them.

use super::DocumentModel;
use crate::core::codes;
use crate::core::error::EditorError;
use crate::core::geom::CursorPosition;
use crate::kernel::notify::ChangeKind;
use crate::models::word_spans;
use rustc_hash::FxHashSet;

/// An unknown word in the body, in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellTarget {
    pub row: usize,
    pub start: usize,
    pub end: usize,
    pub word: String,
}

#[derive(Debug, Default)]
pub(super) struct SpellState {
    target: Option<SpellTarget>,
    suggestions: Vec<String>,
    /// Lowercased words ignored for the rest of the run.
    ignored: FxHashSet<String>,
}

impl DocumentModel {
    pub fn spell_target(&self) -> Option<&SpellTarget> {
        self.spell.target.as_ref()
    }

    pub fn spell_suggestions(&self) -> &[String] {
        &self.spell.suggestions
    }

    /// Moves to the next unknown word after the current one (or the cursor).
    pub fn spell_next(&mut self) -> Result<(), EditorError> {
        let from = self.scan_origin();
        let Some(target) = self.find_unknown(from) else {
            return Err(no_more_misspellings());
        };
        self.select_target(Some(target));
        self.notify(ChangeKind::Spell);
        Ok(())
    }

    /// Ignores the current word everywhere and moves on.
    pub fn spell_ignore(&mut self) -> Result<(), EditorError> {
        let Some(target) = self.spell.target.take() else {
            return Err(no_word_selected());
        };
        self.spell.ignored.insert(target.word.to_lowercase());
        let next = self.find_unknown(CursorPosition::new(target.row, target.end));
        let found = next.is_some();
        self.select_target(next);
        self.notify(ChangeKind::Spell);
        if found {
            Ok(())
        } else {
            Err(no_more_misspellings())
        }
    }

    /// Replaces the current word with suggestion `n` (1-based) and moves on.
    pub fn spell_replace(&mut self, n: usize) -> Result<(), EditorError> {
        let Some(target) = self.spell.target.clone() else {
            return Err(no_word_selected());
        };
        let Some(suggestion) = n
            .checked_sub(1)
            .and_then(|i| self.spell.suggestions.get(i))
        else {
            return Err(EditorError::user(
                codes::NO_SUCH_SUGGESTION,
                format!("there is no suggestion {n}"),
            ));
        };
        let replacement = match_case(&target.word, suggestion);
        if !self
            .buffer
            .replace_range(target.row, target.start, target.end, &replacement)
        {
            return Err(EditorError::program(
                codes::INVALID_CURSOR,
                format!("spelling target {target:?} no longer matches the text"),
            ));
        }
        self.modified = true;
        let after = CursorPosition::new(target.row, target.start + replacement.chars().count());
        self.cursor = after;
        let next = self.find_unknown(after);
        self.select_target(next);
        self.notify(ChangeKind::Spell);
        Ok(())
    }

    /// Silent first scan when spelling mode starts.
    pub(super) fn spell_begin(&mut self) {
        self.spell.target = None;
        let next = self.find_unknown(self.cursor);
        self.select_target(next);
    }

    fn scan_origin(&self) -> CursorPosition {
        match &self.spell.target {
            Some(target) => CursorPosition::new(target.row, target.end),
            None => self.cursor,
        }
    }

    fn select_target(&mut self, target: Option<SpellTarget>) {
        self.spell.suggestions = match &target {
            Some(t) => self.speller.suggestions(&t.word),
            None => Vec::new(),
        };
        if let Some(t) = &target {
            self.cursor = CursorPosition::new(t.row, t.start);
        }
        self.spell.target = target;
    }

    fn find_unknown(&self, from: CursorPosition) -> Option<SpellTarget> {
        for row in from.row..self.buffer.len_lines() {
            let line = self.buffer.line(row)?;
            for (start, end, word) in word_spans(&line) {
                if row == from.row && start < from.col {
                    continue;
                }
                if self.spell.ignored.contains(&word.to_lowercase()) {
                    continue;
                }
                if !self.speller.is_known(&word) {
                    return Some(SpellTarget {
                        row,
                        start,
                        end,
                        word,
                    });
                }
            }
        }
        None
    }
}

/// Keeps a leading capital from the original word.
fn match_case(original: &str, suggestion: &str) -> String {
    let capital = original.chars().next().is_some_and(char::is_uppercase);
    if !capital {
        return suggestion.to_string();
    }
    let mut chars = suggestion.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn no_more_misspellings() -> EditorError {
    EditorError::user(codes::NO_MORE_MISSPELLINGS, "no more unknown words")
}

fn no_word_selected() -> EditorError {
    EditorError::user(codes::NO_WORD_SELECTED, "no unknown word is selected")
}
