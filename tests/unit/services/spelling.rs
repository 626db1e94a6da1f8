use super::*;
use tempfile::tempdir;

#[test]
fn accept_all_knows_everything() {
    let speller = AcceptAllSpeller;
    assert!(speller.is_known("qwxz"));
    assert!(speller.suggestions("qwxz").is_empty());
}

#[test]
fn word_list_is_case_insensitive() {
    let speller = WordListSpeller::from_words(["Hello", "world", "  "]);
    assert_eq!(speller.len(), 2);
    assert!(speller.is_known("hello"));
    assert!(speller.is_known("WORLD"));
    assert!(!speller.is_known("wrold"));
}

#[test]
fn suggestions_are_single_edits() {
    let speller = WordListSpeller::from_words(["world", "word", "would", "sword", "apple"]);
    assert_eq!(speller.suggestions("wrold"), vec!["world".to_string()]);
    assert_eq!(
        speller.suggestions("wodr"),
        vec!["word".to_string()]
    );
    assert_eq!(
        speller.suggestions("wor"),
        vec!["word".to_string()]
    );
    assert!(speller.suggestions("xyzzy").is_empty());
}

#[test]
fn suggestions_are_capped() {
    let words: Vec<String> = ('a'..='z').map(|c| format!("{c}at")).collect();
    let speller = WordListSpeller::from_words(&words);
    let suggestions = speller.suggestions("qat");
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(suggestions[0], "aat");
}

#[test]
fn load_skips_comments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "# my words\nquire\n\nfolio\n").unwrap();
    let speller = WordListSpeller::load(&path).unwrap();
    assert_eq!(speller.len(), 2);
    assert!(speller.is_known("Folio"));
}
