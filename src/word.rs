use std::fmt;

/// One position of a word being stemmed.
///
/// A `y` at the start of a word, or right after a vowel, behaves as a
/// consonant. It is tagged instead of being rewritten to another character so
/// it can never collide with real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    Char(char),
    ConsonantY,
}

impl Letter {
    pub fn is_vowel(self) -> bool {
        matches!(self, Letter::Char('a' | 'e' | 'i' | 'o' | 'u' | 'y'))
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::Char(c) => c,
            Letter::ConsonantY => 'y',
        }
    }

    fn matches(self, c: char) -> bool {
        self == Letter::Char(c)
    }
}

/// Working representation of a word inside the rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Build a word without any consonant-y tagging.
    pub fn plain(text: &str) -> Self {
        Self {
            letters: text.chars().map(Letter::Char).collect(),
        }
    }

    /// Build a word for stemming: drop one leading apostrophe, then tag every
    /// `y` that starts the word or follows a vowel. The scan runs left to
    /// right over the already tagged letters, so a tagged `y` does not count
    /// as a vowel for the letter after it.
    pub fn with_consonant_y(text: &str) -> Self {
        let mut word = Self::plain(text.strip_prefix('\'').unwrap_or(text));
        for i in 0..word.letters.len() {
            if word.letters[i].matches('y') && (i == 0 || word.letters[i - 1].is_vowel()) {
                word.letters[i] = Letter::ConsonantY;
            }
        }
        word
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Letter at `position`; negative positions count back from the end.
    /// Anything out of range yields `None`.
    pub fn at(&self, position: isize) -> Option<Letter> {
        let len = self.letters.len() as isize;
        if position.abs() >= len {
            return None;
        }
        let index = if position < 0 { position + len } else { position };
        Some(self.letters[index as usize])
    }

    /// Whole-word comparison against plain text.
    pub fn is(&self, text: &str) -> bool {
        self.letters.len() == text.chars().count()
            && self.letters.iter().zip(text.chars()).all(|(l, c)| l.matches(c))
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut letters = self.letters.iter();
        prefix
            .chars()
            .all(|c| letters.next().is_some_and(|l| l.matches(c)))
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        let mut letters = self.letters.iter().rev();
        suffix
            .chars()
            .rev()
            .all(|c| letters.next().is_some_and(|l| l.matches(c)))
    }

    /// The entry of `table` with the longest key that ends this word.
    pub fn longest_suffix<'t, T>(&self, table: &'t [T], key: impl Fn(&T) -> &str) -> Option<&'t T> {
        table
            .iter()
            .filter(|&entry| self.ends_with(key(entry)))
            .max_by_key(|&entry| key(entry).chars().count())
    }

    /// True if any of the first `end` letters is a vowel.
    pub fn has_vowel_before(&self, end: usize) -> bool {
        self.letters[..end.min(self.letters.len())]
            .iter()
            .any(|l| l.is_vowel())
    }

    /// Drop the last `count` letters.
    pub fn truncate_end(&mut self, count: usize) {
        let keep = self.letters.len().saturating_sub(count);
        self.letters.truncate(keep);
    }

    pub fn push_str(&mut self, text: &str) {
        self.letters.extend(text.chars().map(Letter::Char));
    }

    /// Swap `suffix` for `replacement` if the word ends with it.
    pub fn replace_suffix(&mut self, suffix: &str, replacement: &str) -> bool {
        if !self.ends_with(suffix) {
            return false;
        }
        self.truncate_end(suffix.chars().count());
        self.push_str(replacement);
        true
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters
            .iter()
            .try_for_each(|l| write!(f, "{}", l.as_char()))
    }
}
