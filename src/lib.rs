// src/lib.rs
//! Urdu-script text to readable Latin slugs.
//!
//! [`transliterate`] and [`make_slug`] run on a shared default engine; build a
//! [`SlugEngine`] directly for custom dictionaries or options.

pub mod core;
pub mod error;
pub mod persistence;
pub mod post;
pub mod registry;
pub mod c_api;

pub use crate::core::engine::SlugEngine;
pub use crate::core::slug::SlugOptions;
pub use crate::error::SlugError;
pub use crate::post::{assign_slug, needs_regeneration, PostRecord};
pub use crate::registry::SlugRegistry;

use lazy_static::lazy_static;

lazy_static! {
    /// Built once on first use, read-only afterwards.
    pub static ref DEFAULT_ENGINE: SlugEngine = SlugEngine::new();
}

/// Lowercase ASCII transliteration of `text`, words separated by single spaces.
pub fn transliterate(text: &str) -> String {
    DEFAULT_ENGINE.transliterate(text)
}

/// Non-empty `[a-z0-9-]` slug of at most 80 characters.
pub fn make_slug(text: &str) -> String {
    DEFAULT_ENGINE.make_slug(text)
}
