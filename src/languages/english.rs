//! Porter2 English stemmer with curated overrides.
//!
//! A word is normalized, looked up in the [`Lexicon`] and, failing that, run
//! through the suffix rules below in order. Each rule table is tried
//! longest-suffix first and a step stops at its first matching suffix, even
//! when the region test then refuses the rewrite.

use std::sync::LazyLock;
use tracing::trace;

use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::regions::{in_r1, in_r2, is_short_syllable_at, is_short_word, is_vowel_at, r1};
use crate::word::{Letter, Word};
use super::Stemmer;

const STEP0_SUFFIXES: [&str; 3] = ["'s'", "'s", "'"];

const STEP1B_EXCEPTIONS: [&str; 8] = [
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];
const EED_SUFFIXES: [&str; 2] = ["eedly", "eed"];
const VERB_SUFFIXES: [&str; 4] = ["ingly", "edly", "ing", "ed"];
const E_RESTORING_ENDINGS: [&str; 3] = ["at", "bl", "iz"];
const DOUBLES: [&str; 9] = ["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

const STEP2_RULES: [(&str, &str); 23] = [
    ("ization", "ize"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ational", "ate"),
    ("ousness", "ous"),
    ("biliti", "ble"),
    ("tional", "tion"),
    ("lessli", "less"),
    ("fulli", "ful"),
    ("entli", "ent"),
    ("ation", "ate"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("ousli", "ous"),
    ("alism", "al"),
    ("abli", "able"),
    ("anci", "ance"),
    ("alli", "al"),
    ("izer", "ize"),
    ("enci", "ence"),
    ("ator", "ate"),
    ("bli", "ble"),
    ("ogi", "og"),
];
/// Letters allowed before a bare `li` ending.
const VALID_LI: [char; 10] = ['c', 'd', 'e', 'g', 'h', 'k', 'm', 'n', 'r', 't'];

const STEP3_RULES: [(&str, &str); 8] = [
    ("ational", "ate"),
    ("tional", "tion"),
    ("alize", "al"),
    ("icate", "ic"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ness", ""),
    ("ful", ""),
];

const STEP4_SUFFIXES: [&str; 18] = [
    "ement", "ment", "ance", "ence", "able", "ible", "ant", "ent", "ion", "ism", "ate", "iti",
    "ous", "ive", "ize", "al", "er", "ic",
];

const STEPS: [(&str, fn(&mut Word)); 8] = [
    ("step0", step0),
    ("step1a", step1a),
    ("step1b", step1b),
    ("step1c", step1c),
    ("step2", step2),
    ("step3", step3),
    ("step4", step4),
    ("step5", step5),
];

static ENGLISH: LazyLock<EnglishStemmer> = LazyLock::new(EnglishStemmer::new);

/// Stem a word with a shared [`EnglishStemmer`].
pub fn stem(word: &str) -> String {
    ENGLISH.stem(word)
}

#[derive(Debug, Clone)]
pub struct EnglishStemmer {
    lexicon: Lexicon,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        let word = normalize(word);

        if let Some(stem) = self.lexicon.resolve_override(&word) {
            trace!(word = %word, stem, "override");
            return stem.to_string();
        }

        if word.chars().count() <= 2 {
            return word;
        }

        let mut stem = Word::with_consonant_y(&word);
        for (name, step) in STEPS {
            step(&mut stem);
            trace!(step = name, word = %stem);
        }
        stem.to_string()
    }
}

/// Possessives.
fn step0(word: &mut Word) {
    if let Some(suffix) = word.longest_suffix(&STEP0_SUFFIXES, |s| *s) {
        word.truncate_end(suffix.chars().count());
    }
}

/// Plurals.
fn step1a(word: &mut Word) {
    if word.replace_suffix("sses", "ss") {
        return;
    }
    if word.ends_with("ied") || word.ends_with("ies") {
        // Length is taken before the suffix goes.
        let replacement = if word.len() > 4 { "i" } else { "ie" };
        word.truncate_end(3);
        word.push_str(replacement);
        return;
    }
    if word.ends_with("us") || word.ends_with("ss") {
        return;
    }
    if word.ends_with("s") && word.has_vowel_before(word.len().saturating_sub(2)) {
        word.truncate_end(1);
    }
}

/// `-eed` and verb endings.
fn step1b(word: &mut Word) {
    if STEP1B_EXCEPTIONS.iter().any(|exception| word.is(exception)) {
        return;
    }

    if let Some(suffix) = word.longest_suffix(&EED_SUFFIXES, |s| *s) {
        if r1(word) != word.len() {
            word.replace_suffix(suffix, "ee");
        }
        return;
    }

    let Some(suffix) = VERB_SUFFIXES
        .iter()
        .find(|suffix| word.ends_with(suffix) && word.has_vowel_before(word.len() - suffix.len()))
    else {
        return;
    };
    word.truncate_end(suffix.len());

    if E_RESTORING_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        word.push_str("e");
    } else if DOUBLES.iter().any(|double| word.ends_with(double)) {
        word.truncate_end(1);
    } else if is_short_word(word) {
        word.push_str("e");
    }
}

/// Final `y` after a non-vowel becomes `i`.
fn step1c(word: &mut Word) {
    let ends_in_y = matches!(word.at(-1), Some(Letter::Char('y') | Letter::ConsonantY));
    if ends_in_y && word.len() > 2 && !is_vowel_at(word, word.len() as isize - 2) {
        word.truncate_end(1);
        word.push_str("i");
    }
}

fn step2(word: &mut Word) {
    if let Some((suffix, replacement)) = word.longest_suffix(&STEP2_RULES, |rule| rule.0) {
        if in_r1(word, suffix) {
            word.replace_suffix(suffix, replacement);
        }
        return;
    }

    let valid_li = matches!(word.at(-3), Some(Letter::Char(c)) if VALID_LI.contains(&c));
    if in_r1(word, "li") && word.len() > 4 && valid_li {
        word.truncate_end(2);
    }
}

fn step3(word: &mut Word) {
    if let Some((suffix, replacement)) = word.longest_suffix(&STEP3_RULES, |rule| rule.0) {
        if in_r1(word, suffix) {
            word.replace_suffix(suffix, replacement);
        }
        return;
    }

    if in_r2(word, "ative") {
        word.truncate_end(5);
    }
}

fn step4(word: &mut Word) {
    let Some(suffix) = word.longest_suffix(&STEP4_SUFFIXES, |s| *s) else {
        return;
    };
    // -ion only goes after s or t.
    let deletable = *suffix != "ion" || matches!(word.at(-4), Some(Letter::Char('s' | 't')));
    if deletable && in_r2(word, suffix) {
        word.truncate_end(suffix.len());
    }
}

fn step5(word: &mut Word) {
    if word.ends_with("e") {
        if in_r2(word, "e")
            || (in_r1(word, "e") && !is_short_syllable_at(word, word.len() as isize - 3))
        {
            word.truncate_end(1);
        }
        return;
    }

    if in_r2(word, "l") && matches!(word.at(-2), Some(Letter::Char('l'))) {
        word.truncate_end(1);
    }
}
