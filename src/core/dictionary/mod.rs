// src/core/dictionary/mod.rs
mod data;

use crate::core::eraab::strip_ignorable;
use crate::core::types::Tier;
use std::collections::HashMap;
use tracing::debug;

/// One exact-match word table.
#[derive(Debug, Clone)]
pub struct DictionaryTier {
    tier: Tier,
    entries: HashMap<String, String>,
}

impl DictionaryTier {
    /// Builds a tier. Keys pass through the diacritic normalizer so they are
    /// compared in the same form as the tokens. On a repeated key the last
    /// entry wins.
    pub fn new<K, V>(tier: Tier, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (strip_ignorable(k.as_ref()), v.into()))
            .collect();
        Self { tier, entries }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The priority-ordered set of word tables.
///
/// Lookups walk the tiers in `Tier` order and stop at the first hit, so a key
/// present in two tiers always resolves to the earlier one.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tiers: Vec<DictionaryTier>,
}

impl Dictionary {
    pub fn new(mut tiers: Vec<DictionaryTier>) -> Self {
        // Stable: two tables with the same tier keep their given order.
        tiers.sort_by_key(DictionaryTier::tier);
        Self { tiers }
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        let dictionary = Self::new(vec![
            DictionaryTier::new(Tier::Title, data::TITLES.iter().copied()),
            DictionaryTier::new(Tier::Common, data::COMMON_WORDS.iter().copied()),
            DictionaryTier::new(Tier::FourLetter, data::FOUR_LETTER.iter().copied()),
            DictionaryTier::new(Tier::ThreeLetter, data::THREE_LETTER.iter().copied()),
        ]);
        for (key, winner, shadowed) in dictionary.overlaps() {
            debug!(key = %key, ?winner, ?shadowed, "dictionary key shadowed by an earlier tier");
        }
        dictionary
    }

    /// Finds a single token, returning the tier it matched in.
    pub fn lookup(&self, token: &str) -> Option<(Tier, &str)> {
        self.tiers
            .iter()
            .find_map(|t| t.get(token).map(|value| (t.tier(), value)))
    }

    /// Whole-phrase match against the title tier only.
    pub fn lookup_phrase(&self, phrase: &str) -> Option<&str> {
        self.tiers
            .iter()
            .filter(|t| t.tier() == Tier::Title)
            .find_map(|t| t.get(phrase))
    }

    /// Keys that appear in more than one tier, as
    /// `(key, winning tier, shadowed tier)`.
    pub fn overlaps(&self) -> Vec<(String, Tier, Tier)> {
        let mut found = Vec::new();
        for (i, earlier) in self.tiers.iter().enumerate() {
            for later in &self.tiers[i + 1..] {
                for key in later.entries.keys() {
                    if earlier.entries.contains_key(key) {
                        found.push((key.clone(), earlier.tier(), later.tier()));
                    }
                }
            }
        }
        found.sort();
        found.dedup_by(|a, b| a.0 == b.0 && a.2 == b.2);
        found
    }

    pub fn tiers(&self) -> &[DictionaryTier] {
        &self.tiers
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
