// File: src/registry.rs
use crate::core::slug::truncate;
use crate::error::SlugError;
use crate::persistence::{load_from_disk, save_to_disk};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Uniqueness index over slugs already handed out.
///
/// `claim` checks and inserts in one step, so wrapping the registry in a
/// `Mutex` is enough to keep concurrent writers from taking the same slug.
/// Collisions are resolved with a per-slug counter rather than timestamps.
///
/// Each slug remembers the id of the record holding it, so saving a record
/// again re-claims its own slug. Records without an id cannot be told apart:
/// `claim` treats them as new, `reserve` treats an id-less record keeping a
/// slug held by another id-less record as the same record saved again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlugRegistry {
    /// Slug -> id of the record holding it.
    taken: HashMap<String, Option<String>>,
    /// Last suffix handed out for each colliding base slug.
    counters: HashMap<String, u64>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the registry at `path`, or starts empty if there is none yet.
    /// `save` writes back to the same place.
    pub fn from_file_or_new(path: &Path) -> Self {
        let mut registry = match load_from_disk(path) {
            Ok(registry) => {
                info!(path = %path.display(), slugs = registry.len(), "loaded slug registry");
                registry
            }
            Err(SlugError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable slug registry, starting empty");
                Self::new()
            }
        };
        registry.path = Some(path.to_path_buf());
        registry
    }

    pub fn save(&self) -> Result<(), SlugError> {
        match &self.path {
            Some(path) => save_to_disk(self, path),
            None => Ok(()), // In-memory registry, nothing to write.
        }
    }

    /// Takes `candidate` if it is free or already held by `owner`, otherwise
    /// the first free `candidate-N` (N from 2 upwards), cut so it still fits
    /// `max_len`.
    pub fn claim(&mut self, candidate: &str, owner: Option<&str>, max_len: usize) -> String {
        if self.try_take(candidate, owner, owner.is_some()) {
            return candidate.to_string();
        }

        let counter = self.counters.entry(candidate.to_string()).or_insert(1);
        loop {
            *counter += 1;
            let next = with_suffix(candidate, *counter, max_len);
            if let Entry::Vacant(slot) = self.taken.entry(next.clone()) {
                slot.insert(owner.map(str::to_string));
                debug!(candidate, slug = %next, "slug collision resolved");
                return next;
            }
        }
    }

    /// Records a slug chosen elsewhere for `owner`. Fails if another record
    /// holds it.
    pub fn reserve(&mut self, slug: &str, owner: Option<&str>) -> Result<(), SlugError> {
        if self.try_take(slug, owner, true) {
            Ok(())
        } else {
            Err(SlugError::Duplicate(slug.to_string()))
        }
    }

    fn try_take(&mut self, slug: &str, owner: Option<&str>, same_owner_ok: bool) -> bool {
        match self.taken.entry(slug.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(owner.map(str::to_string));
                true
            }
            Entry::Occupied(held) => same_owner_ok && held.get().as_deref() == owner,
        }
    }

    /// Frees a slug, e.g. after its post was deleted.
    pub fn release(&mut self, slug: &str) -> bool {
        self.taken.remove(slug).is_some()
    }

    /// Id of the record holding `slug`; `Some(None)` for an id-less record.
    pub fn owner(&self, slug: &str) -> Option<Option<&str>> {
        self.taken.get(slug).map(Option::as_deref)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.taken.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// `base-N` within `max_len`. When not even one character of the base fits,
/// the counter digits stand alone.
fn with_suffix(base: &str, n: u64, max_len: usize) -> String {
    let digits = n.to_string();
    let room = max_len.saturating_sub(digits.len() + 1);
    let base = truncate(base, room);
    if base.is_empty() {
        digits
    } else {
        format!("{base}-{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slug::DEFAULT_MAX_LEN;
    use pretty_assertions::assert_eq;

    fn claim(registry: &mut SlugRegistry, candidate: &str) -> String {
        registry.claim(candidate, None, DEFAULT_MAX_LEN)
    }

    #[test]
    fn free_slug_is_returned_as_is() {
        let mut registry = SlugRegistry::new();
        assert_eq!(claim(&mut registry, "ek-dil"), "ek-dil");
        assert!(registry.contains("ek-dil"));
    }

    #[test]
    fn id_less_claims_never_share() {
        let mut registry = SlugRegistry::new();
        assert_eq!(claim(&mut registry, "ek-dil"), "ek-dil");
        assert_eq!(claim(&mut registry, "ek-dil"), "ek-dil-2");
    }

    #[test]
    fn collisions_count_upwards() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("ghazal", Some("1"), 80), "ghazal");
        assert_eq!(registry.claim("ghazal", Some("2"), 80), "ghazal-2");
        assert_eq!(registry.claim("ghazal", Some("3"), 80), "ghazal-3");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.owner("ghazal-2"), Some(Some("2")));
    }

    #[test]
    fn owner_reclaims_its_own_slug() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("ghazal", Some("a1"), 80), "ghazal");
        assert_eq!(registry.claim("ghazal", Some("a1"), 80), "ghazal");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn counter_skips_slugs_taken_directly() {
        let mut registry = SlugRegistry::new();
        registry.reserve("ghazal", Some("1")).unwrap();
        registry.reserve("ghazal-2", Some("2")).unwrap();
        assert_eq!(registry.claim("ghazal", Some("3"), 80), "ghazal-3");
    }

    #[test]
    fn suffixed_slug_respects_max_len() {
        let mut registry = SlugRegistry::new();
        let base = "a".repeat(80);
        registry.claim(&base, Some("1"), 80);
        let second = registry.claim(&base, Some("2"), 80);
        assert_eq!(second.len(), 80);
        assert!(second.ends_with("-2"));
    }

    #[test]
    fn short_limit_cuts_the_base_not_the_bound() {
        let mut registry = SlugRegistry::new();
        registry.claim("mohabbat-m", Some("1"), 10);
        assert_eq!(registry.claim("mohabbat-m", Some("2"), 10), "mohabbat-2");
    }

    #[test]
    fn suffix_never_doubles_a_hyphen() {
        let mut registry = SlugRegistry::new();
        registry.claim("abcde-fg", Some("1"), 8);
        assert_eq!(registry.claim("abcde-fg", Some("2"), 8), "abcde-2");
    }

    #[test]
    fn tiny_limit_falls_back_to_digits() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("a", Some("1"), 1), "a");
        assert_eq!(registry.claim("a", Some("2"), 1), "2");
        assert_eq!(registry.claim("ab", Some("3"), 2), "ab");
        assert_eq!(registry.claim("ab", Some("4"), 2), "3");
    }

    #[test]
    fn reserve_checks_the_holder() {
        let mut registry = SlugRegistry::new();
        registry.reserve("naat-1", Some("1")).unwrap();
        registry.reserve("naat-1", Some("1")).unwrap();
        assert!(matches!(registry.reserve("naat-1", Some("2")), Err(SlugError::Duplicate(_))));
        assert!(matches!(registry.reserve("naat-1", None), Err(SlugError::Duplicate(_))));
        assert!(registry.release("naat-1"));
        assert!(!registry.release("naat-1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn id_less_records_share_their_slug() {
        let mut registry = SlugRegistry::new();
        registry.reserve("hamd-1", None).unwrap();
        assert!(registry.reserve("hamd-1", None).is_ok());
        assert!(matches!(registry.reserve("hamd-1", Some("9")), Err(SlugError::Duplicate(_))));
    }

    #[test]
    fn in_memory_save_is_a_no_op() {
        assert!(SlugRegistry::new().save().is_ok());
    }
}
