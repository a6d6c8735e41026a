//! FILENAME: core/parser/src/name.rs
//! PURPOSE: Normalises a person's full name into the plain A-Z letters that
//! take part in the name-energy sums.
//! CONTEXT: Canonical decomposition (NFD) splits every accented letter into
//! its base letter and combining marks; the marks are dropped, then case is
//! folded and everything outside A-Z goes. Letters with no decomposition to
//! A-Z (ß, æ, ø) disappear.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalises a name to uppercase A-Z only.
///
/// "José Peña-Núñez" -> "JOSEPENANUNEZ"
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|&ch| !is_combining_mark(ch))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// True for the five vowels used by the soul-number (alma) sum.
pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}
