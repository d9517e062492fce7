/// Lowercase a word and fold typographic quotes to their ASCII forms.
///
/// Curly single quotes (and the C1 codes legacy Windows text decodes them to)
/// become `'`, curly double quotes become `"`. Anything else is left alone,
/// so the empty string passes straight through.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{0091}' | '\u{0092}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{0093}' | '\u{0094}' => '"',
            _ => c,
        })
        .collect()
}
