//! Input normalization: lowercase, strip diacritics, trim.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300..=U+036F).
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Folds `raw` to the form the rules match against.
///
/// Accented vowels and `ñ` decompose to their base letter; other characters,
/// including punctuation such as `¿`, are kept.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.to_lowercase().nfd().filter(|c| !is_diacritic(*c)).collect();
    folded.trim().to_string()
}
