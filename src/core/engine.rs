use crate::core::converter::CharComposer;
use crate::core::dictionary::Dictionary;
use crate::core::eraab::strip_ignorable;
use crate::core::slug::{finish, sanitize, SlugOptions};
use crate::post::PostRecord;
use tracing::trace;

/// The transliteration and slug pipeline.
///
/// Holds only read-only tables, so one engine can be shared by reference
/// across threads.
pub struct SlugEngine {
    dictionary: Dictionary,
    composer: CharComposer,
    options: SlugOptions,
}

impl SlugEngine {
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::builtin())
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            composer: CharComposer::new(),
            options: SlugOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SlugOptions) -> Self {
        self.options = options.normalized();
        self
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Transliterates one whitespace-free token whose ignorable marks are
    /// already stripped. Dictionary tiers first, then letter by letter.
    /// Punctuation-only tokens give an empty string.
    pub fn transliterate_word(&self, token: &str) -> String {
        match self.dictionary.lookup(token) {
            Some((tier, latin)) => {
                trace!(token, ?tier, latin, "dictionary hit");
                latin.to_string()
            }
            None => self.composer.compose(token),
        }
    }

    /// Urdu text to lowercase ASCII words separated by single spaces.
    pub fn transliterate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let normalized = strip_ignorable(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        // A whole-input title match wins before any per-token work.
        let phrase = tokens.join(" ");
        if let Some(latin) = self.dictionary.lookup_phrase(&phrase) {
            trace!(phrase = %phrase, latin, "phrase hit");
            return sanitize(latin);
        }

        let words: Vec<String> = tokens
            .iter()
            .map(|token| self.transliterate_word(token))
            .collect();
        sanitize(&words.join(" "))
    }

    /// URL slug for `text`: `[a-z0-9]` runs joined by single hyphens, never
    /// empty, at most `max_len` characters.
    pub fn make_slug(&self, text: &str) -> String {
        finish(&self.transliterate(text), &self.options)
    }

    /// Slug for a post, built from its first non-blank source field. A post
    /// with none gets the fallback slug.
    pub fn make_slug_for(&self, post: &PostRecord) -> String {
        match post.slug_source() {
            Some(text) => self.make_slug(text),
            None => self.options.fallback.clone(),
        }
    }
}

impl Default for SlugEngine {
    fn default() -> Self {
        Self::new()
    }
}
