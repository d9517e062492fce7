use std::collections::{HashMap, HashSet};
use crate::data;

/// Exact-match overrides consulted before the suffix rules.
///
/// Lookups run in a fixed order: special words, then stop words (which map to
/// themselves), then irregular verb forms and contractions.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub special_words: HashMap<String, String>,
    pub stop_words: HashSet<String>,
    pub irregular_forms: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            special_words: data::load_special_words(),
            stop_words: data::load_stop_words(),
            irregular_forms: data::load_irregular_forms(),
        }
    }

    /// A lexicon with no overrides; every word goes through the rules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn special_word(&self, word: &str) -> Option<&str> {
        self.special_words.get(word).map(String::as_str)
    }

    pub fn stop_word(&self, word: &str) -> Option<&str> {
        self.stop_words.get(word).map(String::as_str)
    }

    pub fn irregular_form(&self, word: &str) -> Option<&str> {
        self.irregular_forms.get(word).map(String::as_str)
    }

    /// First override hit for an already normalized word.
    pub fn resolve_override(&self, word: &str) -> Option<&str> {
        self.special_word(word)
            .or_else(|| self.stop_word(word))
            .or_else(|| self.irregular_form(word))
    }
}
