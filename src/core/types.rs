// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One of the priority-ordered word dictionaries.
/// The derived ordering is the lookup order: earlier tiers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Book titles and fixed multi-word phrases.
    Title,
    Common,
    FourLetter,
    ThreeLetter,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Title, Tier::Common, Tier::FourLetter, Tier::ThreeLetter];
}

/// A short-vowel mark (eraab) that fuses onto the letter before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelMark {
    /// Zabar.
    Fatha,
    /// Zer.
    Kasra,
    /// Pesh.
    Damma,
}

impl VowelMark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{064E}' => Some(VowelMark::Fatha),
            '\u{0650}' => Some(VowelMark::Kasra),
            '\u{064F}' => Some(VowelMark::Damma),
            _ => None,
        }
    }

    pub fn latin(self) -> char {
        match self {
            VowelMark::Fatha => 'a',
            VowelMark::Kasra => 'i',
            VowelMark::Damma => 'u',
        }
    }
}
