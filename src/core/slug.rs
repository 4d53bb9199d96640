// src/core/slug.rs
use crate::error::SlugError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_MAX_LEN: usize = 80;
pub const DEFAULT_MIN_LEN: usize = 3;
pub const DEFAULT_FALLBACK: &str = "urdu-post";

/// Length bounds and fallback for the slug builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    pub max_len: usize,
    pub min_len: usize,
    pub fallback: String,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            min_len: DEFAULT_MIN_LEN,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl SlugOptions {
    pub fn from_json_file(path: &Path) -> Result<Self, SlugError> {
        let reader = BufReader::new(File::open(path)?);
        let options: SlugOptions = serde_json::from_reader(reader)?;
        Ok(options.normalized())
    }

    /// Makes the fallback itself a valid slug within `max_len`, so the output
    /// guarantees hold whatever the caller configured.
    pub fn normalized(mut self) -> Self {
        self.max_len = self.max_len.max(1);
        let fallback = truncate(&hyphenate(&sanitize(&self.fallback)), self.max_len);
        self.fallback = if fallback.is_empty() {
            truncate(DEFAULT_FALLBACK, self.max_len)
        } else {
            fallback
        };
        self
    }
}

/// Lower-cases, keeps only `[a-z0-9]`, whitespace and `-`, then collapses
/// whitespace runs to one space and trims. Idempotent.
pub fn sanitize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace runs become one hyphen, hyphen runs collapse, edge hyphens go.
pub fn hyphenate(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Prefix of at most `max_len` characters with no dangling hyphen.
pub fn truncate(slug: &str, max_len: usize) -> String {
    let cut = slug
        .char_indices()
        .nth(max_len)
        .map_or(slug.len(), |(idx, _)| idx);
    slug[..cut].trim_end_matches('-').to_string()
}

/// Turns sanitized text into the final slug, applying the fallback and the
/// length cap.
pub fn finish(sanitized: &str, options: &SlugOptions) -> String {
    let slug = hyphenate(sanitized);
    if slug.chars().count() < options.min_len {
        return options.fallback.clone();
    }
    truncate(&slug, options.max_len)
}
