//! Vowel, region and syllable classifiers used to gate the suffix rules.
//!
//! R1 is the part of a word after the first non-vowel that follows a vowel,
//! or the empty region at the end of the word if there is no such non-vowel.
//! R2 is found the same way, scanning from the start of R1. Both are handled
//! as start offsets, so `0 <= r1 <= r2 <= len`.

use crate::word::{Letter, Word};

/// Prefixes whose R1 is fixed instead of scanned.
const R1_EXCEPTIONS: [(&str, usize); 3] = [("gener", 5), ("arsen", 5), ("commun", 6)];

pub fn is_vowel_at(word: &Word, position: isize) -> bool {
    word.at(position).is_some_and(Letter::is_vowel)
}

/// Vowel test widened with `w`, `x` and consonant `y`, used for the letter
/// closing a short syllable.
fn is_vowel_wxy_at(word: &Word, position: isize) -> bool {
    word.at(position).is_some_and(|l| {
        l.is_vowel() || matches!(l, Letter::Char('w' | 'x') | Letter::ConsonantY)
    })
}

/// Offset just past the first vowel/non-vowel boundary at or after `from`.
/// The boundary may sit on the virtual position after the last letter.
fn scan_region(word: &Word, from: usize) -> usize {
    let len = word.len();
    (from.max(1)..=len)
        .find(|&i| !is_vowel_at(word, i as isize) && is_vowel_at(word, i as isize - 1))
        .map_or(len, |i| (i + 1).min(len))
}

pub fn r1(word: &Word) -> usize {
    if word.len() > 5 {
        if let Some((_, start)) = R1_EXCEPTIONS
            .iter()
            .find(|(prefix, _)| word.starts_with(prefix))
        {
            return *start;
        }
    }
    scan_region(word, 1)
}

pub fn r2(word: &Word) -> usize {
    scan_region(word, r1(word))
}

/// True if `suffix` ends the word and starts inside the region beginning at
/// `region_start`.
fn suffix_in_region(word: &Word, suffix: &str, region_start: usize) -> bool {
    let suffix_len = suffix.chars().count();
    word.ends_with(suffix) && word.len() >= region_start + suffix_len
}

pub fn in_r1(word: &Word, suffix: &str) -> bool {
    suffix_in_region(word, suffix, r1(word))
}

pub fn in_r2(word: &Word, suffix: &str) -> bool {
    suffix_in_region(word, suffix, r2(word))
}

/// Short syllable ending at `position + 1`: either a vowel then non-vowel at
/// the very start of the word, or non-vowel, vowel, non-vowel where the last
/// one is not `w`, `x` or consonant `y`.
pub fn is_short_syllable_at(word: &Word, position: isize) -> bool {
    if position == 0 {
        return is_vowel_at(word, 0) && !is_vowel_at(word, 1);
    }
    !is_vowel_at(word, position - 1)
        && is_vowel_at(word, position)
        && !is_vowel_wxy_at(word, position + 1)
}

/// Short syllable test on the last two letters.
pub fn is_short_syllable(word: &Word) -> bool {
    is_short_syllable_at(word, word.len() as isize - 2)
}

/// A word is short when it ends in a short syllable and R1 is empty.
pub fn is_short_word(word: &Word) -> bool {
    is_short_syllable(word) && r1(word) == word.len()
}
