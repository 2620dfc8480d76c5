#![allow(dead_code)]
//! Word-validity oracle
//!
//! The engine only ever asks two questions: is this a word, and what
//! words start with this prefix. Vocabulary entries are uppercase,
//! alphabetic-only; anything else in a source file is skipped with no
//! error.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Bundled wordlist, one lowercase word per line.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static BUNDLED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_text(WORDS_DATA));

/// Upper bound on the number of prefix suggestions returned.
pub const MAX_SUGGESTIONS: usize = 50;

/// A fixed vocabulary with O(1) membership lookup.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// An empty vocabulary. Every lookup fails, which degrades the game
    /// (all moves rejected) without crashing it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The wordlist compiled into the binary.
    pub fn bundled() -> &'static Dictionary {
        &BUNDLED
    }

    /// Build from explicit words; intended for tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        Self { words }
    }

    /// Parse a newline-delimited wordlist. Lines that are empty or carry
    /// non-alphabetic characters are skipped, not errors.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load a newline-delimited wordlist file.
    pub fn load_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Check a word against the vocabulary, case-insensitively.
    pub fn is_valid_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words.contains(&word.to_uppercase())
    }

    /// Up to [`MAX_SUGGESTIONS`] vocabulary entries literally prefixed by
    /// the query, shortest first, then lexicographic.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let upper = prefix.to_uppercase();
        let mut matches: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.starts_with(&upper))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dict() -> Dictionary {
        Dictionary::from_words(["cat", "cats", "catalog", "car", "dog", "so"])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = small_dict();
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("CAT"));
        assert!(dict.is_valid_word("CaT"));
        assert!(!dict.is_valid_word("tac"));
        assert!(!dict.is_valid_word(""));
    }

    #[test]
    fn test_suggest_order_and_prefix() {
        let dict = small_dict();
        assert_eq!(dict.suggest("CA"), vec!["CAR", "CAT", "CATS", "CATALOG"]);
        assert_eq!(dict.suggest("cat"), vec!["CAT", "CATS", "CATALOG"]);
        assert!(dict.suggest("X").is_empty());
    }

    // Spell an index with letters only, so every generated word survives
    // the alphabetic filter.
    fn letters(mut i: usize) -> String {
        let mut out = String::new();
        loop {
            out.push((b'A' + (i % 26) as u8) as char);
            i /= 26;
            if i == 0 {
                break;
            }
        }
        out
    }

    #[test]
    fn test_suggest_is_bounded() {
        let words: Vec<String> = (0..100).map(|i| format!("AA{}", letters(i))).collect();
        let dict = Dictionary::from_words(&words);
        assert_eq!(dict.suggest("AA").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dict = Dictionary::from_text("cat\n\ndon't\n123\n  dog  \n");
        assert_eq!(dict.word_count(), 2);
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("dog"));
        assert!(!dict.is_valid_word("don't"));
    }

    #[test]
    fn test_empty_dictionary_rejects_everything() {
        let dict = Dictionary::empty();
        assert!(!dict.is_valid_word("cat"));
        assert!(dict.suggest("c").is_empty());
    }

    #[test]
    fn test_bundled_wordlist_loads() {
        let dict = Dictionary::bundled();
        assert!(dict.word_count() > 500, "bundled list unexpectedly small");
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("word"));
    }
}
