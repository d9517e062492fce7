use crate::normalize::normalize;
use super::Stemmer;

/// Stemmer for text whose language is unknown: only normalizes the word.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndeterminedStemmer;

impl Stemmer for UndeterminedStemmer {
    fn stem(&self, word: &str) -> String {
        normalize(word)
    }
}
