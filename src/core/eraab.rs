// src/core/eraab.rs
//! Diacritic (eraab) handling.
//!
//! Marks fall in two disjoint groups: ignorable marks are deleted before
//! anything else looks at the text, vowel marks stay behind their host letter
//! so the composer can fuse them.

use crate::core::types::VowelMark;
use unicode_normalization::UnicodeNormalization;

/// Marks that contribute nothing to the Latin output.
const IGNORABLE: &[char] = &[
    '\u{0651}', // Shadda
    '\u{0652}', // Sukoon
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{0640}', // Tatweel
];

pub fn is_ignorable(c: char) -> bool {
    IGNORABLE.contains(&c)
}

/// Latin vowel for a zabar/zer/pesh mark, `None` for anything else.
pub fn vowel_latin(c: char) -> Option<char> {
    VowelMark::from_char(c).map(VowelMark::latin)
}

/// Composes to NFC, so a decomposed alef + madda reads as آ, then removes
/// every ignorable mark. Vowel marks are left in place.
pub fn strip_ignorable(text: &str) -> String {
    text.nfc().filter(|&c| !is_ignorable(c)).collect()
}
