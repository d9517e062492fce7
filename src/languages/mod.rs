/// Reduces a word to its stem. Implementations hold only read-only data, so
/// one instance can be shared across threads.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    fn stem_all(&self, words: &[&str]) -> Vec<String> {
        words.iter().map(|word| self.stem(word)).collect()
    }
}

pub mod english;
pub mod undetermined;
