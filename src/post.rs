// File: src/post.rs
use crate::core::engine::SlugEngine;
use crate::error::SlugError;
use crate::registry::SlugRegistry;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// How much of the body feeds the slug when there is no title or first line.
pub const BODY_SOURCE_CHARS: usize = 60;

lazy_static! {
    /// Slugs left over from numeric ids, e.g. `1712345678` or `17-2`.
    static ref NUMERIC_SLUG: Regex = Regex::new(r"^\d+(-\d+)?$").expect("valid pattern");
}

/// The parts of a stored post that matter for its slug. Any other fields are
/// carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostRecord {
    /// Text the slug is built from: title, else first line, else the start of
    /// the body. Blank fields are skipped; `None` means the fallback slug.
    pub fn slug_source(&self) -> Option<&str> {
        let body_head = self.body.as_deref().map(|b| head(b, BODY_SOURCE_CHARS));
        [self.title.as_deref(), self.lines.first().map(String::as_str), body_head]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }

    /// The record's own id, from `_id` or `id`. Numbers are read as text.
    pub fn record_id(&self) -> Option<String> {
        ["_id", "id"]
            .iter()
            .filter_map(|key| self.extra.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    pub fn needs_slug(&self) -> bool {
        self.slug.as_deref().map_or(true, needs_regeneration)
    }
}

/// First `n` characters of `text`.
fn head(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// True for slugs that must be rebuilt before a write: blank ones and purely
/// numeric ones, optionally with a single numeric suffix.
pub fn needs_regeneration(slug: &str) -> bool {
    let slug = slug.trim();
    slug.is_empty() || NUMERIC_SLUG.is_match(slug)
}

/// Pre-save hook. Rebuilds a missing or numeric slug and claims a unique
/// variant of it; otherwise cleans up the stored slug and reserves it as is.
/// Saving a record again keeps the slug it already holds. Returns the slug
/// the post ends up with; on error the post is left untouched.
pub fn assign_slug<'a>(
    engine: &SlugEngine,
    post: &'a mut PostRecord,
    registry: &mut SlugRegistry,
) -> Result<&'a str, SlugError> {
    let owner = post.record_id();
    let slug = if post.needs_slug() {
        let candidate = engine.make_slug_for(post);
        let claimed = registry.claim(&candidate, owner.as_deref(), engine.options().max_len);
        debug!(candidate = %candidate, slug = %claimed, "generated slug");
        claimed
    } else {
        let existing = post.slug.as_deref().unwrap_or_default().trim().to_lowercase();
        registry.reserve(&existing, owner.as_deref())?;
        existing
    };
    Ok(post.slug.insert(slug).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slug::SlugOptions;
    use pretty_assertions::assert_eq;

    fn post(title: Option<&str>, lines: &[&str], body: Option<&str>) -> PostRecord {
        PostRecord {
            title: title.map(str::to_string),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            body: body.map(str::to_string),
            ..PostRecord::default()
        }
    }

    #[test]
    fn source_prefers_title_then_line_then_body() {
        assert_eq!(post(Some("t"), &["l"], Some("b")).slug_source(), Some("t"));
        assert_eq!(post(None, &["l"], Some("b")).slug_source(), Some("l"));
        assert_eq!(post(Some(""), &[], Some("b")).slug_source(), Some("b"));
        assert_eq!(post(None, &[], None).slug_source(), None);
    }

    #[test]
    fn blank_fields_are_skipped() {
        assert_eq!(post(Some("   "), &["", "second"], Some("b")).slug_source(), Some("b"));
    }

    #[test]
    fn body_is_cut_at_sixty_chars() {
        let body = "ب".repeat(100);
        let record = post(None, &[], Some(&body));
        let source = record.slug_source().unwrap();
        assert_eq!(source.chars().count(), BODY_SOURCE_CHARS);
    }

    #[test]
    fn regeneration_rule() {
        assert!(needs_regeneration(""));
        assert!(needs_regeneration("   "));
        assert!(needs_regeneration("1712345678"));
        assert!(needs_regeneration("17-2"));
        assert!(!needs_regeneration("1-2-3"));
        assert!(!needs_regeneration("ghazal-1"));
        assert!(!needs_regeneration("2024-review"));
    }

    #[test]
    fn missing_slug_is_generated_and_claimed() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let mut first = post(Some("پیر کامل"), &[], None);
        let mut second = first.clone();

        assert_eq!(assign_slug(&engine, &mut first, &mut registry).unwrap(), "peer-e-kamil");
        assert_eq!(assign_slug(&engine, &mut second, &mut registry).unwrap(), "peer-e-kamil-2");
        assert_eq!(first.slug.as_deref(), Some("peer-e-kamil"));
    }

    #[test]
    fn empty_post_gets_the_fallback() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let mut record = post(None, &[], Some("  "));
        assert_eq!(assign_slug(&engine, &mut record, &mut registry).unwrap(), "urdu-post");
        let mut again = post(None, &[], None);
        assert_eq!(assign_slug(&engine, &mut again, &mut registry).unwrap(), "urdu-post-2");
    }

    #[test]
    fn numeric_slug_is_replaced() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let mut record = post(None, &["ایک دل"], None);
        record.slug = Some("1700000000".into());
        assert_eq!(assign_slug(&engine, &mut record, &mut registry).unwrap(), "ek-dil");
    }

    #[test]
    fn existing_slug_is_kept_and_reserved() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let mut record = post(Some("پیر کامل"), &[], None);
        record.slug = Some("  Ghazal-1 ".into());
        assert_eq!(assign_slug(&engine, &mut record, &mut registry).unwrap(), "ghazal-1");

        let mut clash = post(None, &[], None);
        clash.extra.insert("_id".into(), Value::from("2"));
        clash.slug = Some("ghazal-1".into());
        let err = assign_slug(&engine, &mut clash, &mut registry).unwrap_err();
        assert!(matches!(err, SlugError::Duplicate(s) if s == "ghazal-1"));
        assert_eq!(clash.slug.as_deref(), Some("ghazal-1"));
    }

    #[test]
    fn saving_the_same_post_twice_keeps_its_slug() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let mut record: PostRecord = serde_json::from_str(r#"{"title":"پیر کامل"}"#).unwrap();

        assert_eq!(assign_slug(&engine, &mut record, &mut registry).unwrap(), "peer-e-kamil");
        assert_eq!(assign_slug(&engine, &mut record, &mut registry).unwrap(), "peer-e-kamil");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn record_with_id_reclaims_its_regenerated_slug() {
        let engine = SlugEngine::new();
        let mut registry = SlugRegistry::new();
        let json = r#"{"_id":"65f0","title":"پیر کامل","slug":"1700000000"}"#;

        let mut first: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(assign_slug(&engine, &mut first, &mut registry).unwrap(), "peer-e-kamil");
        // Same record loaded again with its old numeric slug.
        let mut again: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(assign_slug(&engine, &mut again, &mut registry).unwrap(), "peer-e-kamil");

        let mut other: PostRecord =
            serde_json::from_str(r#"{"_id":"65f1","title":"پیر کامل"}"#).unwrap();
        assert_eq!(assign_slug(&engine, &mut other, &mut registry).unwrap(), "peer-e-kamil-2");
    }

    #[test]
    fn record_id_reads_string_or_number() {
        let with_string: PostRecord = serde_json::from_str(r#"{"_id":" a1 "}"#).unwrap();
        assert_eq!(with_string.record_id().as_deref(), Some("a1"));
        let with_number: PostRecord = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(with_number.record_id().as_deref(), Some("42"));
        let blank: PostRecord = serde_json::from_str(r#"{"_id":""}"#).unwrap();
        assert_eq!(blank.record_id(), None);
    }

    #[test]
    fn collision_suffix_stays_within_the_engine_limit() {
        let engine = SlugEngine::new().with_options(SlugOptions {
            max_len: 10,
            ..SlugOptions::default()
        });
        let mut registry = SlugRegistry::new();
        let mut first = post(Some("محبت محبت محبت"), &[], None);
        let mut second = first.clone();

        let a = assign_slug(&engine, &mut first, &mut registry).unwrap().to_string();
        let b = assign_slug(&engine, &mut second, &mut registry).unwrap().to_string();
        assert_eq!(a, "mohabbat-m");
        assert_eq!(b, "mohabbat-2");
        assert!(a.len() <= 10 && b.len() <= 10);
    }

    #[test]
    fn unknown_fields_round_trip() {
        let json = r#"{"category":"Ghazal","title":"دل","pages":250}"#;
        let record: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra.get("category"), Some(&Value::from("Ghazal")));
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["pages"], Value::from(250));
        assert_eq!(back["title"], Value::from("دل"));
    }
}
