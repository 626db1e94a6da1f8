//! Spell-checker boundary.
//!
//! The editor only asks two questions: is this word known, and what could it
//! have been. `WordListSpeller` answers them from a plain word list.

use rustc_hash::FxHashSet;
use std::path::Path;

pub const MAX_SUGGESTIONS: usize = 9;

pub trait SpellChecker {
    fn is_known(&self, word: &str) -> bool;

    fn suggestions(&self, word: &str) -> Vec<String>;
}

/// Knows every word. Used when no dictionary is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllSpeller;

impl SpellChecker for AcceptAllSpeller {
    fn is_known(&self, _word: &str) -> bool {
        true
    }

    fn suggestions(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Case-insensitive word list.
#[derive(Debug, Default, Clone)]
pub struct WordListSpeller {
    words: FxHashSet<String>,
}

impl WordListSpeller {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_words(
            data.lines().filter(|l| !l.trim_start().starts_with('#')),
        ))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListSpeller {
    fn is_known(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Dictionary words within edit distance 1, sorted, at most [`MAX_SUGGESTIONS`].
    fn suggestions(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let mut out: Vec<String> = self
            .words
            .iter()
            .filter(|candidate| within_one_edit(&word, candidate))
            .cloned()
            .collect();
        out.sort();
        out.truncate(MAX_SUGGESTIONS);
        out
    }
}

fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a == b {
        return false;
    }
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    match long.len() - short.len() {
        0 => {
            let diffs: Vec<usize> = (0..short.len()).filter(|&i| short[i] != long[i]).collect();
            match diffs.as_slice() {
                [_] => true,
                // adjacent transposition
                [i, j] => *j == i + 1 && short[*i] == long[*j] && short[*j] == long[*i],
                _ => false,
            }
        }
        1 => {
            let mut i = 0;
            while i < short.len() && short[i] == long[i] {
                i += 1;
            }
            short[i..] == long[i + 1..]
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/spelling.rs"]
mod tests;
