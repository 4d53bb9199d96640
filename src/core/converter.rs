// src/core/converter.rs
use crate::core::charmap::latin_for;
use crate::core::eraab::vowel_latin;

/// Letter-by-letter Urdu to Latin converter, used when no dictionary knows
/// the word.
pub struct CharComposer;

impl CharComposer {
    pub fn new() -> Self {
        Self
    }

    /// Single left-to-right pass over one token.
    ///
    /// A mapped letter followed by zabar/zer/pesh takes the vowel with it.
    /// ASCII letters and digits pass through lower-cased; everything else,
    /// including a vowel mark with no letter in front of it, is dropped.
    pub fn compose(&self, token: &str) -> String {
        let mut result = String::with_capacity(token.len());
        let mut chars = token.chars().peekable();

        while let Some(c) = chars.next() {
            match latin_for(c) {
                Some(latin) => {
                    result.push_str(latin);
                    if let Some(vowel) = chars.peek().copied().and_then(vowel_latin) {
                        result.push(vowel);
                        chars.next();
                    }
                }
                None if c.is_ascii_alphanumeric() => result.push(c.to_ascii_lowercase()),
                None => {}
            }
        }

        result
    }
}

impl Default for CharComposer {
    fn default() -> Self {
        Self::new()
    }
}
